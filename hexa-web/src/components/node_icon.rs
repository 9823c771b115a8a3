use hexa_core::NodeInfo;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub node: NodeInfo,
}

/// Node icon: an image for asset paths, otherwise the glyph itself.
#[function_component(NodeIcon)]
pub fn node_icon(p: &Props) -> Html {
    if p.node.icon_is_image() {
        html! {
            <img class="node-icon" src={p.node.icon.clone()} alt={p.node.display_name.clone()} />
        }
    } else {
        html! { <span class="node-icon node-icon--glyph" aria-hidden="true">{ p.node.icon.clone() }</span> }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use hexa_core::job_node_data;
    use yew::LocalServerRenderer;

    fn render(job: &str, node_id: &str) -> String {
        let props = Props {
            node: job_node_data(job, node_id).unwrap(),
        };
        block_on(LocalServerRenderer::<NodeIcon>::with_props(props).render())
    }

    #[test]
    fn asset_icons_render_as_images() {
        let html = render("Hayato", "origin");
        assert!(html.contains("<img"));
    }

    #[test]
    fn glyph_icons_render_inline() {
        let html = render("Hero", "origin");
        assert!(html.contains("node-icon--glyph"));
        assert!(!html.contains("<img"));
    }
}
