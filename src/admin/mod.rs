/// Domain layer for the administration clients
///
/// Pure data shapes and statement rendering. Nothing in here talks to the
/// network; the ports and adapters layers own all I/O.
pub mod domain;
pub mod services;
