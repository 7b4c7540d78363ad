//! Minimal host loop: build the dashboard from a config, advance
//! simulated time, and print what would be painted.

use learnboard_core::{Category, NotificationSpec, Rect, RecordingCanvas, Widget};
use learnboard_widgets::{DashboardConfig, NotificationStack, PerformanceMonitor};

fn main() {
    let config = DashboardConfig::from_toml_str(
        r#"
        theme = "dark"

        [monitor]
        tick_interval_ms = 1000
        seed = 42
        "#,
    )
    .expect("example config is valid");

    let mut monitor = PerformanceMonitor::new()
        .theme(config.theme.theme())
        .tick_interval_ms(config.monitor.tick_interval_ms);
    monitor.show();
    monitor.layout(Rect::new(16.0, 16.0, 320.0, 320.0));

    let mut stack = NotificationStack::new().theme(config.theme.theme());
    stack.layout(Rect::new(460.0, 16.0, 320.0, 600.0));
    stack.notify(
        NotificationSpec::new(Category::Learning, "Quiz ready", "Chapter 4 quiz is available")
            .duration_ms(5000)
            .action("Start quiz", || println!("-> action: quiz started")),
    );
    stack.notify(NotificationSpec::new(
        Category::Achievement,
        "Streak!",
        "7 days in a row",
    ));

    // Ten one-second frames of simulated time.
    for second in 1..=10u32 {
        monitor.advance(1000);
        for expired in stack.advance(1000) {
            println!("[{second:>2}s] expired: {expired}");
        }

        let mut canvas = RecordingCanvas::new();
        monitor.paint(&mut canvas);
        stack.paint(&mut canvas);

        let snapshot = monitor.snapshot();
        println!(
            "[{second:>2}s] cpu {:5.1}%  mem {:5.1}%  battery {:6.2}%  score {:3}  cards {}  draw commands {}",
            snapshot.cpu,
            snapshot.memory,
            snapshot.battery,
            snapshot.performance_score(),
            stack.len(),
            canvas.command_count(),
        );
    }
}
