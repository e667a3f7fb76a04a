//! Startup validation of the built-in geometry tables.
//!
//! Table gaps degrade silently at rotation time, so a game calls this once before
//! its first spawn and refuses to start on a defect.

use anyhow::{Context, Result};
use log::info;

use crate::core::geometry::geometry;
use crate::types::PieceKind;

/// Validate the table of every piece kind
pub fn check_geometry() -> Result<()> {
    for kind in PieceKind::ALL {
        geometry(kind)
            .validate()
            .with_context(|| format!("invalid geometry table for the {} piece", kind))?;
    }
    info!("geometry tables valid for {} piece kinds", PieceKind::ALL.len());
    Ok(())
}
