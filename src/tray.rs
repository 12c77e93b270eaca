use tray_icon::{
    menu::{Menu, MenuItem},
    Icon, TrayIcon, TrayIconBuilder,
};

pub const MENU_SHOW: &str = "show";
pub const MENU_QUIT: &str = "quit";

/// Icon asset checked at startup before falling back to a drawn one.
pub const ICON_FILE: &str = "icons/clock.png";

/// Build the tray icon with its Show/Quit menu.
///
/// Returns `None` when the platform refuses; the app keeps running without
/// a tray in that case. The returned handle must be kept alive or the icon
/// disappears.
pub fn setup_tray() -> Option<TrayIcon> {
    let menu = Menu::new();
    let show = MenuItem::with_id(MENU_SHOW, "Show", true, None);
    let quit = MenuItem::with_id(MENU_QUIT, "Quit", true, None);
    if let Err(e) = menu.append_items(&[&show, &quit]) {
        tracing::warn!("failed to build tray menu: {e}");
        return None;
    }
    match TrayIconBuilder::new()
        .with_menu(Box::new(menu))
        .with_tooltip("Sit Reminder")
        .with_icon(load_icon())
        .build()
    {
        Ok(icon) => Some(icon),
        Err(e) => {
            tracing::warn!("failed to create tray icon: {e}");
            None
        }
    }
}

fn load_icon() -> Icon {
    if let Ok(img) = image::open(ICON_FILE) {
        let rgba = img.into_rgba8();
        let (width, height) = rgba.dimensions();
        match Icon::from_rgba(rgba.into_raw(), width, height) {
            Ok(icon) => return icon,
            Err(e) => tracing::warn!("icon asset {ICON_FILE} rejected: {e}"),
        }
    }
    tracing::debug!("using drawn fallback tray icon");
    fallback_icon()
}

/// A blue gradient disc, matching the app's original icon.
fn fallback_icon() -> Icon {
    const SIZE: u32 = 32;
    let mut rgba = vec![0u8; (SIZE * SIZE * 4) as usize];
    let center = SIZE as f32 / 2.0;
    let radius = 12.0;

    for y in 0..SIZE {
        for x in 0..SIZE {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            if (dx * dx + dy * dy).sqrt() > radius {
                continue;
            }
            // Diagonal gradient from #2196f3 to #21cbf3.
            let t = (x + y) as f32 / ((2 * SIZE) as f32);
            let idx = ((y * SIZE + x) * 4) as usize;
            rgba[idx] = 0x21;
            rgba[idx + 1] = (0x96 as f32 + (0xcb - 0x96) as f32 * t) as u8;
            rgba[idx + 2] = 0xf3;
            rgba[idx + 3] = 0xff;
        }
    }

    Icon::from_rgba(rgba, SIZE, SIZE).expect("fallback icon buffer is well-formed")
}
