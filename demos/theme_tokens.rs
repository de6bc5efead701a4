use pagecraft::{MotionContext, MotionDirective, ThemeStore};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let store = ThemeStore::builtin();
    for name in ["acme", "beta", "no-such-theme"] {
        let theme = store.resolve(name);
        println!("{name} -> {} ({})", theme.name, theme.brand.name);
    }

    let theme = store.resolve("acme");
    println!();
    println!("{}", serde_json::to_string_pretty(&theme.to_value()?)?);
    println!();

    for reduced_motion in [false, true] {
        let motion = MotionContext::for_theme(theme, reduced_motion);
        let label = if reduced_motion {
            "reduced motion"
        } else {
            "full motion"
        };
        match motion.resolve("fadeUp") {
            MotionDirective::Animated(preset) => {
                println!("{label}: fadeUp animates over {}s with {}", preset.duration, preset.ease);
            }
            MotionDirective::Immediate => {
                println!("{label}: fadeUp jumps straight to the final state");
            }
        }
    }

    Ok(())
}
