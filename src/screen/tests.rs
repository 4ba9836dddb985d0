// Tests for monitor descriptors and debug dumps

#[cfg(test)]
mod screen_tests {
    use super::super::fake::FakeScreen;
    use super::super::{CaptureError, MonitorInfo, ScreenSource, dump_file_name, dump_monitors};
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("screen-locate-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_monitor_bounds_label() {
        let monitor = MonitorInfo::new(2, -1920, 0, 1920, 1080);
        assert_eq!(monitor.bottom_right(), (0, 1080));
        assert_eq!(monitor.bounds_label(), "(-1920,0)..(0,1080)");
        assert!(!monitor.is_primary, "Only the first monitor defaults to primary");
    }

    #[test]
    fn test_fake_lists_monitors_from_one() {
        let screen = FakeScreen::new()
            .with_blank_monitor(0, 0, 40, 30)
            .with_blank_monitor(40, 0, 20, 20);

        let monitors = screen.list_monitors().unwrap();
        let indices: Vec<usize> = monitors.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn test_unavailable_display_is_reported() {
        let screen = FakeScreen::new().with_blank_monitor(0, 0, 10, 10).unavailable();
        let err = screen.list_monitors().unwrap_err();
        assert!(matches!(err, CaptureError::Unavailable { .. }));
    }

    #[test]
    fn test_dump_writes_one_png_per_monitor() {
        let dir = scratch_dir("dump");
        let screen = FakeScreen::new()
            .with_blank_monitor(0, 0, 16, 12)
            .with_blank_monitor(16, 0, 8, 8);

        let written = dump_monitors(&screen, &dir).unwrap();

        assert_eq!(written, vec![dir.join("screen1.png"), dir.join("screen2.png")]);
        let second = image::open(&written[1]).unwrap();
        assert_eq!((second.width(), second.height()), (8, 8));
        assert_eq!(screen.capture_count(), 2);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_dump_stops_on_capture_failure() {
        let dir = scratch_dir("dump-fail");
        let screen = FakeScreen::new()
            .with_blank_monitor(0, 0, 8, 8)
            .failing_capture_of(1);

        let err = dump_monitors(&screen, &dir).unwrap_err();
        assert!(matches!(err, CaptureError::MonitorCaptureFailed { index: 1, .. }));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_dump_file_name() {
        assert_eq!(dump_file_name(3), "screen3.png");
    }
}
