//! Locates a War Thunder installation on disk.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Common installation locations, probed in order
fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = vec![
        PathBuf::from(r"C:\Program Files (x86)\Steam\steamapps\common\War Thunder"),
        PathBuf::from(r"C:\Program Files\Steam\steamapps\common\War Thunder"),
        PathBuf::from(r"D:\SteamLibrary\steamapps\common\War Thunder"),
        PathBuf::from(r"E:\Games\War Thunder"),
    ];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".local/share/Steam/steamapps/common/War Thunder"));
        candidates.push(home.join("Games").join("War Thunder"));
    }
    candidates
}

/// Return the first existing candidate installation, if any
pub fn find_installation() -> Option<PathBuf> {
    candidate_paths().into_iter().find(|path| path.is_dir())
}

/// Ask the operator for an installation path on stdin.
/// Surrounding quotes are stripped, as paths pasted from a file manager
/// often carry them.
pub fn prompt_for_path() -> io::Result<PathBuf> {
    print!("War Thunder path: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim().trim_matches('"')))
}
