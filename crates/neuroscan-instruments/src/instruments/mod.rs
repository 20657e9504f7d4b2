pub mod neuroscan;
