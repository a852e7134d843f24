use chrono::Datelike;
use yew::prelude::*;

use crate::components::contact_form::ContactFormView;
use crate::components::feature_card::FeatureCard;
use crate::components::testimonial_card::TestimonialCard;
use crate::contact::submitter;
use crate::content::{self, FEATURES, SOCIAL_LINKS, STEPS, TESTIMONIALS};

#[function_component(Home)]
pub fn home() -> Html {
    // One submitter per page instance
    let submitter = use_state(submitter::default_submitter);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let year = chrono::Local::now().year();

    html! {
        <div class="landing">
            <header class="site-header">
                <h1 class="brand">{content::BRAND}</h1>
                <p class="tagline">{content::TAGLINE}</p>
            </header>

            <main class="landing-main">
                <section class="hero">
                    <div class="hero-copy">
                        <h2>{content::HERO_TITLE}</h2>
                        <p>{content::HERO_SUBTITLE}</p>
                        <a href="#contact" class="hero-cta">{content::HERO_CTA}</a>
                    </div>
                    <div class="hero-media card">
                        <div class="pulse">{"[Image or Video Placeholder]"}</div>
                    </div>
                </section>

                <section class="section">
                    <h2 class="section-title">{"Key Features"}</h2>
                    <div class="grid grid-4">
                        { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <FeatureCard key={feature.title} feature={*feature} index={index} />
                        }) }
                    </div>
                </section>

                <section class="section">
                    <h2 class="section-title">{"How It Works"}</h2>
                    <div class="steps">
                        { for STEPS.iter().enumerate().map(|(i, step)| html! {
                            <div key={step.title} class="card step slide-in" style={format!("animation-delay: {}ms;", i * 150)}>
                                <div class="step-number">{format!("{}.", i + 1)}</div>
                                <div>
                                    <h3>{step.title}</h3>
                                    <p>{step.description}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </section>

                <section class="section">
                    <h2 class="section-title">{"What Our Users Are Saying"}</h2>
                    <div class="grid grid-3">
                        { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                            <TestimonialCard key={testimonial.name} testimonial={*testimonial} index={index} />
                        }) }
                    </div>
                </section>

                <section class="section" id="contact">
                    <h2 class="section-title">{"Contact Us"}</h2>
                    <div class="card contact-card">
                        <ContactFormView submitter={(*submitter).clone()} />
                    </div>
                </section>
            </main>

            <footer class="site-footer">
                {format!("© {} {}. All rights reserved.", year, content::BRAND)}
                <div class="social-links">
                    { for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                        <a key={*label} href={*href}>{*label}</a>
                    }) }
                </div>
            </footer>

            <style>
                {r#"
                .landing {
                    min-height: 100vh;
                    background: linear-gradient(135deg, #111827, #581c87, #000);
                    color: #fff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    overflow-x: hidden;
                }

                .site-header {
                    padding: 1.5rem 1rem;
                    text-align: center;
                }

                .brand {
                    font-size: 3.5rem;
                    font-weight: 700;
                    margin: 0;
                    background: linear-gradient(90deg, #60a5fa, #c084fc);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .tagline {
                    margin: 1rem auto 0;
                    max-width: 42rem;
                    color: #d1d5db;
                    font-size: 1.1rem;
                }

                .landing-main {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 3rem 1rem;
                    display: flex;
                    flex-direction: column;
                    gap: 4rem;
                }

                .hero {
                    text-align: center;
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .hero-copy {
                    opacity: 0;
                    animation: slideDown 0.8s ease-in-out forwards;
                }

                .hero-copy h2 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .hero-copy p {
                    color: #d1d5db;
                    font-size: 1.1rem;
                    max-width: 48rem;
                    margin: 0 auto 1.5rem;
                }

                .hero-cta {
                    display: inline-block;
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #3b82f6, #a855f7);
                    color: #fff;
                    text-decoration: none;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.3);
                    transition: transform 0.3s ease;
                }

                .hero-cta:hover {
                    transform: scale(1.05);
                }

                .hero-media {
                    width: 100%;
                    max-width: 48rem;
                    margin: 0 auto;
                    opacity: 0;
                    animation: zoomIn 0.8s ease-in-out 0.5s forwards;
                }

                .pulse {
                    color: #9ca3af;
                    animation: pulse 2s ease-in-out infinite;
                }

                .section {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .section-title {
                    font-size: 2rem;
                    text-align: center;
                    margin: 0;
                }

                .grid {
                    display: grid;
                    gap: 2rem;
                    grid-template-columns: 1fr;
                }

                .card {
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
                    transition: all 0.3s ease;
                }

                .card h3 {
                    font-size: 1.25rem;
                    margin: 0 0 0.5rem;
                }

                .card p {
                    color: #d1d5db;
                    margin: 0;
                }

                .grid .card:hover {
                    transform: scale(1.02);
                }

                .feature-icon {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                    color: #60a5fa;
                }

                .steps {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .step {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .step-number {
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: #60a5fa;
                }

                .testimonial-header {
                    display: flex;
                    align-items: center;
                    margin-bottom: 1rem;
                }

                .testimonial-header img {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    margin-right: 1rem;
                }

                .testimonial-header h4 {
                    margin: 0;
                    font-size: 1.1rem;
                }

                .testimonial-quote {
                    font-style: italic;
                }

                .contact-card {
                    width: 100%;
                    max-width: 42rem;
                    margin: 0 auto;
                    box-sizing: border-box;
                    padding: 2rem;
                }

                .site-footer {
                    padding: 1.5rem 1rem;
                    text-align: center;
                    color: #9ca3af;
                }

                .social-links {
                    margin-top: 0.5rem;
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                }

                .social-links a {
                    color: inherit;
                    transition: color 0.3s ease;
                }

                .social-links a:hover {
                    color: #60a5fa;
                }


                .slide-in {
                    opacity: 0;
                    animation: slideUp 0.8s ease-in-out forwards;
                }

                .fade-in {
                    opacity: 0;
                    animation: fadeIn 0.8s ease-in-out forwards;
                }

                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes slideUp {
                    from { opacity: 0; transform: translateY(50px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes slideDown {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes zoomIn {
                    from { opacity: 0; transform: scale(0.8); }
                    to { opacity: 1; transform: scale(1); }
                }

                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }

                @media (min-width: 768px) {
                    .grid-3, .grid-4 {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .grid-3 {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }

                @media (min-width: 1024px) {
                    .grid-4 {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .brand {
                        font-size: 2.5rem;
                    }

                    .hero-copy h2 {
                        font-size: 2rem;
                    }

                    .step {
                        flex-direction: column;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </div>
    }
}
