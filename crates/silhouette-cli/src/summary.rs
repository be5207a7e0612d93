use std::path::Path;

use console::Style;
use silhouette_core::detection::{DetectionConfig, SilhouetteReport};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_report(image: &Path, config: &DetectionConfig, report: &SilhouetteReport) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Silhouette Count"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Image"),
        s.path.apply_to(image.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{}x{}", report.width, report.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(format!(
            "brightness <= {}, {}",
            config.edge_threshold, config.connectivity
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Min size"),
        s.value
            .apply_to(format!("> {:.2}% of image", config.min_relative_size * 100.0))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Identified"),
        s.value.apply_to(report.components)
    );
    if let Some(&largest) = report.component_sizes.iter().max() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Largest"),
            s.value.apply_to(format!("{largest} px"))
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Large"),
        s.value.apply_to(report.large_objects)
    );
    println!();
}
