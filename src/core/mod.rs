pub mod project;
pub mod status;

pub use project::{BIN_NAME, ENDPOINTS, EXPECTED_SERVICES, NEXT_STEPS, PROJECT_NAME};
pub use status::{parse_ps_output, ServiceRow, StatusReport};
