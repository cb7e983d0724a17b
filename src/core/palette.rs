/// Default series palette, applied positionally when a datum carries no
/// explicit color. Callers override per point or via chart config; the
/// constant itself is never mutated.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#06B6D4", "#F97316", "#84CC16",
    "#EC4899", "#6366F1",
];

pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";
pub const AXIS_COLOR: &str = "#6B7280";
pub const GRID_COLOR: &str = "#E5E7EB";
pub const TEXT_COLOR: &str = "#374151";

/// Resolves the fill for series entry `index`: an explicit per-datum color
/// wins, otherwise the palette cycles.
#[must_use]
pub fn series_color<'a>(explicit: Option<&'a str>, index: usize) -> &'a str {
    explicit.unwrap_or(DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()])
}
