// Handlers are grouped by surface: the public auth surface (no token) and
// the two role-oriented protected surfaces.
pub mod donator;
pub mod public;
pub mod receiver;
