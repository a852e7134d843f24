use yew::prelude::*;

use crate::content::Feature;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
    /// Position in the grid, used to stagger the slide-in.
    #[prop_or_default]
    pub index: usize,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let Feature { title, description, icon } = props.feature;

    html! {
        <div class="card slide-in" style={format!("animation-delay: {}ms;", props.index * 150)}>
            <div class="feature-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}
