//! CLI command handlers

use std::path::Path;

use log::{info, warn};

use crate::directory::DIRECTORY;
use crate::error::Result;
use crate::pipeline::ClipPipeline;

/// Print the station directory with transport mode icons
pub fn list_stations() -> Result<()> {
    for station in &DIRECTORY.stations {
        let icons: String = station.modes.iter().map(|m| m.icon()).collect();
        println!("{:<14} {} {}", station.id, station.name, icons);
    }
    Ok(())
}

/// Print known lines and their routes
pub fn list_lines() -> Result<()> {
    for (name, line) in &DIRECTORY.lines {
        println!("{}", name);
        for (idx, route) in line.routes.iter().enumerate() {
            let stops: Vec<&str> = route
                .iter()
                .map(|id| DIRECTORY.lookup_station(id).station().name.as_str())
                .collect();
            // Placeholder names are the raw ids, which reads fine here
            println!("  route {}: {}", idx, stops.join(" -> "));
        }
    }
    Ok(())
}

/// Fetch the given clip URLs and write the combined WAV
pub fn export(urls: &[String], out: &Path) -> Result<()> {
    let pipeline = ClipPipeline::try_default()?;
    let blob = pipeline.encode(urls)?;

    blob.save(out)?;
    info!(
        "Wrote {} bytes ({}) to {}",
        blob.len(),
        blob.mime_type(),
        out.display()
    );
    Ok(())
}

/// Build and export the announcement for one route of a line
pub fn export_line(name: &str, route: usize, base_url: &str, out: &Path) -> Result<()> {
    let line = DIRECTORY.line(name)?;
    let station_ids = line.routes.get(route).or_else(|| line.routes.first());

    for id in station_ids.into_iter().flatten() {
        if DIRECTORY.lookup_station(id).is_placeholder() {
            warn!("Unknown station id '{}', using placeholder clip", id);
        }
    }

    let urls = DIRECTORY.route_audio_urls(name, route, base_url)?;
    export(&urls, out)
}
