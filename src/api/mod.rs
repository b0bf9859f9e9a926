//! HTTP surface
//!
//! POST /api/palette — generate a palette (body: `PaletteInput`)
//! GET  /api/health  — liveness

mod palette_routes;

pub use palette_routes::{create_palette_router, AppState, ErrorBody};
