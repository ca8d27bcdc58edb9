use ratatui::layout::Rect;
use ratatui::Frame;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields).
/// - They may hold borrowed state (e.g. the frame's `HitMap`).
/// - They render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so components can record clickable regions
/// into borrowed state while drawing.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
