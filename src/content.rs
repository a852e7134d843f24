// Copy shown on the landing page.

pub const BRAND: &str = "MemoTag";
pub const TAGLINE: &str =
    "Your all-in-one solution for organizing thoughts, ideas, and everything in between.";
pub const HERO_TITLE: &str = "Effortlessly Organize Your Thoughts";
pub const HERO_SUBTITLE: &str =
    "Capture, tag, and connect your ideas with MemoTag. Boost your productivity and creativity.";
pub const HERO_CTA: &str = "Get Started Free";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub quote: &'static str,
    pub avatar: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Intuitive Interface",
        description: "MemoTag offers a clean and user-friendly interface for effortless organization.",
        icon: "🚀",
    },
    Feature {
        title: "Powerful Tagging",
        description: "Organize your notes with a flexible and robust tagging system.",
        icon: "⚡",
    },
    Feature {
        title: "Cross-Platform Access",
        description: "Access your notes anytime, anywhere, on any device.",
        icon: "🗂️",
    },
    Feature {
        title: "Collaboration",
        description: "Share your notes and collaborate with others in real-time.",
        icon: "👥",
    },
];

pub const STEPS: [Step; 3] = [
    Step {
        title: "Capture Your Ideas",
        description: "Quickly capture your thoughts using text, voice, or images.",
    },
    Step {
        title: "Organize with Tags",
        description: "Categorize your notes with custom tags for easy retrieval.",
    },
    Step {
        title: "Connect and Discover",
        description: "Link related notes and discover new connections between your ideas.",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Alice Smith",
        quote: "MemoTag has transformed the way I organize my thoughts. It's incredibly intuitive and efficient!",
        avatar: "https://source.unsplash.com/random/50x50/?woman,1",
    },
    Testimonial {
        name: "Bob Johnson",
        quote: "The tagging feature is a game-changer. I can easily find any note in seconds.",
        avatar: "https://source.unsplash.com/random/50x50/?man,1",
    },
    Testimonial {
        name: "Charlie Brown",
        quote: "I love the cross-platform access. I can use it on my phone, tablet, and computer.",
        avatar: "https://source.unsplash.com/random/50x50/?boy,1",
    },
];

pub const SOCIAL_LINKS: [(&str, &str); 2] = [("Twitter", "#"), ("Facebook", "#")];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // Titles and names double as list keys when rendering.
    #[test]
    fn list_keys_are_unique() {
        let titles: HashSet<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles.len(), FEATURES.len());

        let steps: HashSet<_> = STEPS.iter().map(|s| s.title).collect();
        assert_eq!(steps.len(), STEPS.len());

        let names: HashSet<_> = TESTIMONIALS.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), TESTIMONIALS.len());
    }
}
