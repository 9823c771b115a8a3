use hexa_core::{NodeInfo, Progress, job_nodes};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::node_icon::NodeIcon;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub job: AttrValue,
    pub progress: Progress,
    /// Raw level requested for a node; the receiver clamps it.
    pub on_set_level: Callback<(String, i64)>,
}

/// Current level of every node for the character's job.
#[function_component(HexaGrid)]
pub fn hexa_grid(p: &Props) -> Html {
    let nodes = job_nodes(&p.job);
    html! {
        <section class="hexa-grid">
            <h2>{ "HEXA Matrix" }</h2>
            <ul class="hexa-grid__nodes">
                { for nodes.into_iter().map(|node| node_cell(p, node)) }
            </ul>
        </section>
    }
}

fn node_cell(p: &Props, node: NodeInfo) -> Html {
    let level = p.progress.level(&node.id);
    let ceiling = node.ceiling();
    let step = |delta: i64| {
        let cb = p.on_set_level.clone();
        let id = node.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit((id.clone(), i64::from(level) + delta)))
    };
    let on_input = {
        let cb = p.on_set_level.clone();
        let id = node.id.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>()
                && let Ok(value) = input.value().trim().parse::<i64>()
            {
                cb.emit((id.clone(), value));
            }
        })
    };
    let class = classes!(
        "hexa-node",
        format!("hexa-node--{}", node.kind.as_str()),
        (level >= ceiling).then_some("hexa-node--maxed"),
    );

    html! {
        <li key={node.id.clone()} class={class}>
            <NodeIcon node={node.clone()} />
            <span class="hexa-node__name">{ node.display_name.clone() }</span>
            <div class="hexa-node__level">
                <button aria-label="Decrease" disabled={level == 0} onclick={step(-1)}>{ "−" }</button>
                <input
                    type="number"
                    min="0"
                    max={ceiling.to_string()}
                    value={level.to_string()}
                    oninput={on_input}
                />
                <span class="hexa-node__ceiling">{ format!("/ {ceiling}") }</span>
                <button aria-label="Increase" disabled={level >= ceiling} onclick={step(1)}>{ "+" }</button>
            </div>
        </li>
    }
}
