use yew::prelude::*;
use yew_hooks::use_interval;

use crate::carousel::{counter_value, format_counter};
use crate::config::{COUNTER_DURATION_MS, COUNTER_TICK_MS};

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: f64,
    #[prop_or_default]
    pub decimals: usize,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// Counts up from zero to `target` once, then stops its interval.
#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let elapsed = use_state(|| 0u32);
    let running = *elapsed < COUNTER_DURATION_MS;

    {
        let elapsed = elapsed.clone();
        use_interval(
            move || elapsed.set((*elapsed + COUNTER_TICK_MS).min(COUNTER_DURATION_MS)),
            if running { COUNTER_TICK_MS } else { 0 },
        );
    }

    let value = counter_value(props.target, *elapsed, COUNTER_DURATION_MS);
    html! {
        <span class="counter">{format_counter(value, props.decimals)}{&props.suffix}</span>
    }
}
