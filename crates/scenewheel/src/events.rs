use radial::InputEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Input(InputEvent),
    Show,
    Hide,
    SurfaceChanged,
    Rescan,
    AssetsChanged,
    ConfigReload,
}
