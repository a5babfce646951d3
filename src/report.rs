use crate::graph_algos::Route;

use std::{fmt::Display, fs, io, path::Path};
use log::debug;


/// Second report line when no path exists
pub const UNREACHABLE: &str = "unreachable";


/// Render a route as two lines: the comma separated path, then the total
/// An unreachable target renders an empty path line, keeping it apart
/// from a zero-weight single-node path
pub fn render<C: Copy + Display>(route: &Route<C>) -> String {
    match route.total() {
        Some(total) => format!("{}\n{}", route.path().join(","), total),
        None => format!("\n{UNREACHABLE}"),
    }
}

pub fn write_report<C: Copy + Display>(path: impl AsRef<Path>, route: &Route<C>) -> io::Result<()> {
    let path = path.as_ref();
    fs::write(path, render(route))?;
    debug!("report written to {}", path.display());
    Ok(())
}
