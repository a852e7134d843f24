use yew::prelude::*;

use crate::content::Testimonial;

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: Testimonial,
    #[prop_or_default]
    pub index: usize,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let Testimonial { name, quote, avatar } = props.testimonial;

    html! {
        <div class="card fade-in" style={format!("animation-delay: {}ms;", props.index * 200)}>
            <div class="testimonial-header">
                <img src={avatar} alt={name} loading="lazy" />
                <h4>{name}</h4>
            </div>
            <p class="testimonial-quote">{format!("“{}”", quote)}</p>
        </div>
    }
}
