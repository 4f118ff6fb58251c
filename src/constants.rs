// Fixed addresses and timings of the SPC-700.

pub const RESET_VECTOR: u16     = 0xFFFE;   // PC is loaded from here on reset.
pub const BRK_VECTOR: u16       = 0xFFDE;   // Shared with TCALL 0.
pub const TCALL_BASE: u16       = 0xFFC0;   // Vector for TCALL 15. TCALL 0 is at the top.
pub const U_PAGE: u16           = 0xFF00;   // Page used for pcall.
pub const STACK_PAGE: u16       = 0x0100;   // Page used for the stack.
pub const DIRECT_PAGE_1: u16    = 0x0100;   // Direct page when P is set.

pub const RESET_CYCLES: usize   = 7;        // Not measured: an estimate of the startup delay.
pub const BRANCH_CYCLES: usize  = 2;        // Extra cycles spent when a branch is taken.
