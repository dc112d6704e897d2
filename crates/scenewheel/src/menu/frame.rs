use radial::{Engine, SectorKind};
use std::fmt::Write;

/// Text rendering of the open menu: title, angle indicator and one line per sector.
pub fn render(engine: &Engine) -> String {
    let mut out = String::new();
    let Some(anchor) = engine.anchor() else {
        return out;
    };

    let title = engine.title().map_or("", |l| l.as_str());
    let _ = writeln!(
        out,
        "[{}] at ({:.0}, {:.0}) r={:.0} angle={:.1}",
        title,
        anchor.x,
        anchor.y,
        engine.radius(),
        engine.indicator_angle()
    );

    for sector in engine.sectors() {
        let marker = if sector.hovered { '>' } else { ' ' };
        let suffix = match sector.kind {
            SectorKind::Back => " <-",
            SectorKind::Item(_) if sector.is_branch => " ...",
            SectorKind::Item(_) => "",
        };
        let icon = sector.icon.map_or(String::new(), |i| format!(" [{}]", i));
        let _ = writeln!(
            out,
            "{} {:>2} {}{}{} ({:.1}, {:.1})",
            marker, sector.index, sector.label, suffix, icon, sector.offset.x, sector.offset.y
        );
    }
    out
}
