// `data-marquee-*` overrides read from the gallery root.
use marquee_core::MarqueeConfig;

pub const CONFIG_ATTRIBUTES: &[&str] = &[
    "data-marquee-ease",
    "data-marquee-velocity",
    "data-marquee-drag",
    "data-marquee-wheel",
    "data-marquee-range",
    "data-marquee-skew",
    "data-marquee-preview-threshold",
];

/// Applies one attribute to `config`. Unknown names and unparsable values are errors.
pub fn apply_attribute(config: &mut MarqueeConfig, name: &str, raw: &str) -> anyhow::Result<()> {
    let raw = raw.trim();
    if name == "data-marquee-wheel" {
        match raw {
            "off" | "false" | "0" => config.wheel_enabled = false,
            "on" | "true" | "" => config.wheel_enabled = true,
            _ => {
                config.wheel_factor = parse(name, raw)?;
                config.wheel_enabled = true;
            }
        }
        return Ok(());
    }

    let field = match name {
        "data-marquee-ease" => &mut config.scroll_ease,
        "data-marquee-velocity" => &mut config.velocity,
        "data-marquee-drag" => &mut config.drag_factor,
        "data-marquee-range" => &mut config.distortion_range,
        "data-marquee-skew" => &mut config.distortion_max,
        "data-marquee-preview-threshold" => &mut config.preview_threshold,
        _ => return Err(anyhow::anyhow!("unknown attribute {}", name)),
    };
    *field = parse(name, raw)?;
    Ok(())
}

/// Applies one attribute only if the resulting config still validates.
///
/// On error `config` is left as it was, so earlier overrides survive.
pub fn apply_validated(config: &mut MarqueeConfig, name: &str, raw: &str) -> anyhow::Result<()> {
    let mut candidate = config.clone();
    apply_attribute(&mut candidate, name, raw)?;
    candidate.validate()?;
    *config = candidate;
    Ok(())
}

fn parse(name: &str, raw: &str) -> anyhow::Result<f32> {
    raw.trim_end_matches("px")
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| anyhow::anyhow!("{}=\"{}\" is not a number", name, raw))
}
