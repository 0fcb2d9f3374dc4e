pub const WIDTH_8BIT: usize = 1;
pub const WIDTH_16BIT: usize = 2;
pub const WIDTH_32BIT: usize = 4;
pub const WIDTH_64BIT: usize = 8;
pub const WIDTH_BITS: usize = 1;

// Reserved catalogue entries: declared widths, no decode behavior.
pub const WIDTH_DWORD_MODICON_COUNTER: usize = 4;
pub const WIDTH_BLOCK_EXTRACT: usize = 19;
