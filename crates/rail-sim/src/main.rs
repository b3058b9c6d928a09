use anyhow::Context;
use rail_core::{
    compute_progress, count_word_spans, filled_count, rail_frame, tokenize_markup, FxConfig,
    Rect, StackItem, StackState, Viewport,
};

// Simulated page: a rail of full-width panels, the services stack in panel 3.
const VIEWPORT: Viewport = Viewport::new(1440.0, 900.0);
const PANEL_COUNT: usize = 6;
const STACK_PANEL: usize = 3;
const STACK_HEIGHT: f64 = 720.0;
const HEADINGS: [&str; PANEL_COUNT] = [
    "We build <em>quiet</em> software for loud markets",
    "Strategy, design and engineering under one roof",
    "Selected work from the last <strong>ten</strong> years",
    "Services that compound over time",
    "A small team with long memory",
    "Say hello",
];
const SERVICES: [&str; 5] = [
    "/media/strategy.jpg",
    "/media/product.jpg",
    "/media/brand.jpg",
    "/media/platform.jpg",
    "/media/growth.jpg",
];

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let steps: usize = match std::env::args().nth(1) {
        Some(s) => s.parse().with_context(|| format!("invalid step count `{s}`"))?,
        None => 20,
    };
    let steps = steps.max(1);
    let cfg = FxConfig::default();
    cfg.validate()?;

    let rail_width = VIEWPORT.width * PANEL_COUNT as f64;
    let travel = rail_width - VIEWPORT.width;
    // Proxy is exactly tall enough to scroll the rail's full travel.
    let proxy_height = travel + VIEWPORT.height;

    let words: Vec<usize> = HEADINGS
        .iter()
        .map(|h| count_word_spans(&tokenize_markup(h)))
        .collect();
    log::info!("[sim] panels={} words={:?}", PANEL_COUNT, words);

    let items = SERVICES
        .iter()
        .enumerate()
        .map(|(index, url)| StackItem {
            index,
            image_url: url.to_string(),
        })
        .collect();
    let mut stack = StackState::new(items).with_forced(0);

    for step in 0..=steps {
        let scroll_top = travel * step as f64 / steps as f64;
        let progress = compute_progress(scroll_top, proxy_height, VIEWPORT.height);
        let rail = rail_frame(progress, rail_width, VIEWPORT.width);

        let panel = |i: usize| {
            Rect::new(
                rail.translate_x + VIEWPORT.width * i as f64,
                0.0,
                VIEWPORT.width,
                VIEWPORT.height,
            )
        };

        let scales: Vec<String> = (0..PANEL_COUNT)
            .map(|i| format!("{:.3}", cfg.proximity.scale_for(&panel(i), &VIEWPORT)))
            .collect();

        let revealed: Vec<String> = (0..PANEL_COUNT)
            .map(|i| {
                let heading = panel(i);
                let fraction = cfg.reveal.progress_for(
                    heading.center().x,
                    VIEWPORT.center().x,
                    heading.width * 0.6,
                    VIEWPORT.width,
                );
                format!("{}/{}", filled_count(fraction, words[i]), words[i])
            })
            .collect();

        let container = panel(STACK_PANEL);
        let g = cfg.stack.sweep(&container, &VIEWPORT);
        let frame = cfg.stack.layout(g, stack.len(), STACK_HEIGHT);
        let ys: Vec<String> = frame
            .iter()
            .map(|c| format!("{:.0}", c.transform.translate_y))
            .collect();
        // a visitor reaches for the list once the stack has settled
        if g >= 1.0 && stack.release_forced() {
            log::info!("[sim] pointer enters the stack; preview released");
        }
        let active = stack.resolve_active(g);
        if let Some(url) = active.and_then(|a| stack.media_for(a).map(str::to_owned)) {
            log::info!("[stack] media -> {}", url);
        }

        log::info!(
            "[sim] step={:>3} progress={:.3} rail_x={:>8.1} bar={:>5.1}% scale=[{}] words=[{}] g={:.3} active={:?} y=[{}]",
            step,
            progress,
            rail.translate_x,
            rail.bar_percent,
            scales.join(" "),
            revealed.join(" "),
            g,
            active,
            ys.join(" "),
        );
    }
    Ok(())
}
