// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod matcher;

pub use matcher::Matcher;
