use hexa_core::{NodeInfo, Step};
use yew::prelude::*;

use crate::components::node_icon::NodeIcon;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Position of the step in the full sequence.
    pub index: usize,
    pub step: Step,
    /// Resolved node data; `None` for ids outside the catalog.
    pub node: Option<NodeInfo>,
    #[prop_or_default]
    pub done: bool,
    /// Show edit controls instead of the completion button.
    #[prop_or_default]
    pub editable: bool,
    #[prop_or_default]
    pub is_last: bool,
    #[prop_or_default]
    pub on_complete: Callback<usize>,
    #[prop_or_default]
    pub on_edit: Callback<usize>,
    #[prop_or_default]
    pub on_remove: Callback<usize>,
    #[prop_or_default]
    pub on_move: Callback<(usize, usize)>,
}

#[function_component(PriorityItem)]
pub fn priority_item(p: &Props) -> Html {
    let index = p.index;
    let emit = |cb: &Callback<usize>| {
        let cb = cb.clone();
        Callback::from(move |_: MouseEvent| cb.emit(index))
    };
    let move_to = |to: usize| {
        let cb = p.on_move.clone();
        Callback::from(move |_: MouseEvent| cb.emit((index, to)))
    };
    let name = p
        .node
        .as_ref()
        .map_or_else(|| p.step.node_id.clone(), |node| node.display_name.clone());
    let class = classes!(
        "priority-item",
        p.done.then_some("priority-item--done"),
        p.node.is_none().then_some("priority-item--unknown"),
    );

    html! {
        <li class={class}>
            <span class="priority-item__index">{ index + 1 }</span>
            if let Some(node) = p.node.clone() {
                <NodeIcon {node} />
            }
            <span class="priority-item__name">{ name }</span>
            <span class="priority-item__level">{ format!("Lv. {}", p.step.target_level) }</span>
            if p.editable {
                <div class="priority-item__actions">
                    <button aria-label="Move up" disabled={index == 0} onclick={move_to(index.saturating_sub(1))}>{ "↑" }</button>
                    <button aria-label="Move down" disabled={p.is_last} onclick={move_to(index + 1)}>{ "↓" }</button>
                    <button class="priority-item__edit" aria-label="Edit step" disabled={p.node.is_none()} onclick={emit(&p.on_edit)}>{ "✎" }</button>
                    <button class="priority-item__remove" aria-label="Remove step" onclick={emit(&p.on_remove)}>{ "✕" }</button>
                </div>
            } else if !p.done {
                <button class="priority-item__complete" onclick={emit(&p.on_complete)}>{ "Done" }</button>
            }
        </li>
    }
}
