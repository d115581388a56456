// Common test utilities and fixtures


// Re-export commonly used items
// Note: These may appear unused in unit tests but are used in integration tests
#[allow(unused_imports)]
pub use fixtures::{sample_documents, INTRODUCTION_MD, RESOURCES_MD, SESSIONS_MD, TOOLS_MD};
#[allow(unused_imports)]
pub use helpers::{create_test_services, test_config, DocServer, UNREACHABLE_BASE_URL};
