use super::CombinedReport;

/// Format "N of M sampled" or just "none" for an empty bucket.
fn sampled_of(sampled: usize, count: usize) -> String {
    if count == 0 {
        "none".to_string()
    } else {
        format!("{sampled} of {count} sampled")
    }
}

pub fn print_markdown(report: &CombinedReport) {
    println!("# Design Options Report");
    println!();
    println!("**Source:** `{}`", report.source);
    println!();
    if let Some(seed) = report.summary.seed {
        println!("**Sample seed:** {seed}");
        println!();
    }
    println!(
        "**Dataset:** {} options, {} curated exemplars",
        report.summary.options, report.summary.subset
    );
    println!();

    let Some(anchors) = &report.anchors else {
        println!("No data available.");
        return;
    };

    println!("## Normalization anchors");
    println!();
    println!("| Dimension | Best | Worst |");
    println!("|---|---:|---:|");
    println!("| Cost | {:.0} | {:.0} |", anchors.cost_best, anchors.cost_worst);
    println!("| Carbon | {:.0} | {:.0} |", anchors.carbon_best, anchors.carbon_worst);
    println!();

    println!("## Color categories");
    println!();
    println!("| Category | Options | Radar sample |");
    println!("|---|---:|---|");
    for c in &report.categories {
        println!("| {} | {} | {} |", c.category, c.count, sampled_of(c.sampled, c.count));
    }
    println!();

    println!("## Zoom windows");
    println!();
    println!("| View | X range | Y range |");
    println!("|---|---|---|");
    for w in &report.windows {
        println!(
            "| {} | {:.1} to {:.1} | {:.1} to {:.1} |",
            w.view, w.window.x[0], w.window.x[1], w.window.y[0], w.window.y[1]
        );
    }
    println!();

    println!("## Sampled options ({})", report.sampled.len());
    println!();
    println!("| Option | Category | Cost | Carbon | Comfort | Compliance | Circularity |");
    println!("|---|---|---:|---:|---:|---:|---:|");
    for s in &report.sampled {
        println!(
            "| {} | {} | {:.1} | {:.1} | {:.1} | {:.1} | {:.1} |",
            s.label,
            s.category,
            s.scores.cost,
            s.scores.carbon,
            s.scores.comfort,
            s.scores.compliance,
            s.scores.circularity
        );
    }
}
