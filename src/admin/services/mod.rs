pub mod script_builder;

pub use script_builder::{ArgumentSlot, RenderedArgument, ScriptBuilder, StatementTemplate};
