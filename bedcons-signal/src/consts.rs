pub const DEFAULT_BIN_SIZE: u32 = 50;
pub const DEFAULT_BIN_OVERLAP: u32 = 0;
pub const DEFAULT_THRESHOLD: f64 = 0.5;
pub const DEFAULT_REDUCER: &str = "mean";
