/// Exit codes for CI/automation.
pub const SUCCESS: i32 = 0;
pub const VALIDATION_FAILED: i32 = 2;
/// Navigation produced no step: unknown current step, or the end of the flow.
pub const NAVIGATION_ENDED: i32 = 3;
pub const RUNTIME_ERROR: i32 = 4;
