/// Runs `$block` and warns when it takes longer than `$budget` (a `Duration`).
/// Evaluates to the block's value. Timing is skipped unless `DF.log_performance`.
#[macro_export]
macro_rules! trace_time {
    ($name:expr, $budget:expr, $block:block) => {{
        if $crate::config::DF.log_performance {
            let start = $crate::utils::AppInstant::now();
            let result = $block;
            let took = start.elapsed();
            let budget: std::time::Duration = $budget;
            if took > budget {
                log::warn!(
                    "{} over budget: {} (budget {})",
                    $name,
                    $crate::utils::format_duration(took),
                    $crate::utils::format_duration(budget)
                );
            }
            result
        } else {
            $block
        }
    }};
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    #[test]
    fn yields_the_block_value() {
        let total = crate::trace_time!("Sum", Duration::from_secs(1), { (1..=4).sum::<u32>() });
        assert_eq!(total, 10);
    }

    #[test]
    fn over_budget_block_still_returns() {
        let label = crate::trace_time!("Sleep", Duration::ZERO, {
            std::thread::sleep(Duration::from_millis(1));
            "done"
        });
        assert_eq!(label, "done");
    }
}
