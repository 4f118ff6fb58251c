// Common utils

// Single bit selection.
macro_rules! bit {
    ($bit_num:expr) => {
        bit!($bit_num, u8)
    };
    ($bit_num:expr, u8) => {
        (1 << $bit_num) as u8
    };
    ($bit_num:expr, u16) => {
        (1 << $bit_num) as u16
    };
}

// Test a single bit.
macro_rules! test_bit {
    ($val:expr, $bit_num:expr) => {
        test_bit!($val, $bit_num, u16)
    };
    ($val:expr, $bit_num:expr, u8) => {
        ($val & bit!($bit_num, u8)) != 0
    };
    ($val:expr, $bit_num:expr, u16) => {
        ($val & bit!($bit_num, u16)) != 0
    };
}

// Make a 16-bit value from two 8-bit values.
macro_rules! make16 {
    ($hi:expr, $lo:expr) => {
        (($hi as u16) << 8) | ($lo as u16)
    };
}

// Get the low byte of a 16-bit value.
macro_rules! lo {
    ($val:expr) => {
        $val as u8
    };
}

// Get the high byte of a 16-bit value.
macro_rules! hi {
    ($val:expr) => {
        ($val >> 8) as u8
    };
}
