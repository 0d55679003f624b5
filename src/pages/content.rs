// Copy for the marketing sections. Editing the site mostly means editing here.

pub struct Badge {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const TRUST_BADGES: &[Badge] = &[
    Badge { src: "/assets/logo-nahb.png", alt: "NAHB Member" },
    Badge { src: "/assets/logo-homeadvisor-elite.png", alt: "HomeAdvisor Elite Service" },
    Badge { src: "/assets/logo-bbb.png", alt: "BBB A+ Rated" },
    Badge { src: "/assets/logo-qualified-remodeler.png", alt: "Qualified Remodeler Top 500 2025" },
    Badge { src: "/assets/logo-installation-masters.png", alt: "Installation Masters" },
    Badge { src: "/assets/logo-energy-star.png", alt: "Energy Star Partner" },
];

pub struct ProcessStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        icon: "💬",
        title: "Answer Quick Questions",
        description: "Tell us about your project so we can prepare the right estimate.",
    },
    ProcessStep {
        icon: "📅",
        title: "Free On-Site Estimate",
        description: "A concrete expert visits your home to review options.",
    },
    ProcessStep {
        icon: "📄",
        title: "Clear, Upfront Price",
        description: "No pressure, no hidden fees. You know exactly what to expect.",
    },
    ProcessStep {
        icon: "🔨",
        title: "We Handle Everything",
        description: "Love your quote? We schedule a time and handle tear-out, prep, pour, and finish.",
    },
];

#[derive(Clone, PartialEq)]
pub struct Review {
    pub name: &'static str,
    pub location: &'static str,
    pub rating: u8,
    pub text: &'static str,
}

pub const REVIEWS: &[Review] = &[
    Review {
        name: "Michael R.",
        location: "Denver, CO",
        rating: 5,
        text: "They tore out our cracked old driveway and poured a new one in two days. Showed up on time every morning, cleaned up before leaving, and the finish looks fantastic.",
    },
    Review {
        name: "Sarah M.",
        location: "Boulder, CO",
        rating: 5,
        text: "Our new stamped patio is the best thing we've done to the house. The crew explained every step and protected the yard the whole time.",
    },
    Review {
        name: "James T.",
        location: "Fort Collins, CO",
        rating: 5,
        text: "Came in ahead of schedule and under the estimate because they planned it well upfront. Neighbors keep asking who did the work.",
    },
    Review {
        name: "Linda K.",
        location: "Littleton, CO",
        rating: 5,
        text: "After five quotes these were the most honest. No upselling, a detailed quote, and every milestone hit on time.",
    },
    Review {
        name: "Carlos G.",
        location: "Lakewood, CO",
        rating: 5,
        text: "Walkway and steps poured last winter and everything still looks perfect. Proper prep, quality materials, no shortcuts.",
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What types of concrete projects do you handle?",
        answer: "We handle a wide range of concrete projects, including residential and commercial work. This includes driveways, patios, walkways, foundations, slabs, and other concrete installations.",
    },
    Faq {
        question: "What does the free estimate include?",
        answer: "Your free estimate includes an on-site walkthrough, measurements, project discussion, and clear upfront pricing. There's no obligation and no pressure.",
    },
    Faq {
        question: "Are you licensed and insured?",
        answer: "Yes. We are fully licensed and insured, including liability and workers' compensation. This protects you, your property, and ensures the work meets local requirements.",
    },
    Faq {
        question: "Can concrete be installed during colder months?",
        answer: "Yes. Concrete can be installed during colder weather when proper techniques are used. We follow proven methods to ensure durability and long-term performance.",
    },
    Faq {
        question: "When can I schedule my project?",
        answer: "Projects can be scheduled year-round, including winter, spring, and summer. In some cases, current promotions may still apply to future scheduled work.",
    },
    Faq {
        question: "How long does a typical concrete project take?",
        answer: "Project timelines vary based on size and scope, but many residential and commercial projects are completed within a few days. We'll review timing during your estimate.",
    },
];
