mod canonicalize_unexistent;
use canonicalize_unexistent::canonicalize_unexistent;

mod init_logging;
pub use init_logging::*;

mod handle_api_failure;
pub use handle_api_failure::*;

mod partition;
pub use partition::*;
