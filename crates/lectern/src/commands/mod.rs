//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod export;
pub(crate) mod init;
pub(crate) mod sidebar;

pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;
pub(crate) use init::InitArgs;
pub(crate) use sidebar::SidebarArgs;
