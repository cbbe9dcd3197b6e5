/// One tab of the Home hub section.
pub struct Solution {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub static SOLUTIONS: [Solution; 4] = [
    Solution {
        title: "Lease-to-Own Financing",
        subtitle: "Capital Access",
        description: "Farmers receive high-yield machinery for zero money down, paying small amounts aligned with harvest cycles. We de-risk the investment through asset collateralization.",
        image: "https://images.unsplash.com/photo-1625246333195-78d9c38ad449?q=80&w=1600&auto=format&fit=crop",
    },
    Solution {
        title: "Energy-Linked Deployment",
        subtitle: "Grid Stability",
        description: "We deploy high-load assets (mills, cold chains) to electrified areas, creating predictable 'Anchor Tenant' demand that makes mini-grids financially viable.",
        image: "https://images.unsplash.com/photo-1509391366360-2e959784a276?q=80&w=1600&auto=format&fit=crop",
    },
    Solution {
        title: "Tech-Enabled Operations",
        subtitle: "Asset Security",
        description: "IoT infrastructure provides real-time tracking, remote lockout capabilities, and predictive maintenance alerts to protect asset value and ensure repayments.",
        image: "https://images.unsplash.com/photo-1581092160562-40aa08e78837?q=80&w=1600&auto=format&fit=crop",
    },
    Solution {
        title: "Full Lifecycle Management",
        subtitle: "O&M Support",
        description: "Rapid response maintenance teams ensure assets never go dark. We handle the repairs, spare parts, and servicing so the farmer can focus on production.",
        image: "https://images.unsplash.com/photo-1592982537447-7440770cbfc9?q=80&w=1600&auto=format&fit=crop",
    },
];

pub struct AssetClass {
    pub name: &'static str,
    pub load: &'static str,
    pub description: &'static str,
}

pub static ASSET_CLASSES: [AssetClass; 4] = [
    AssetClass {
        name: "Agro-Processing",
        load: "5 to 30 kW",
        description: "Rice hullers, grain mills and cassava graters that turn raw harvest into higher value product at the village edge.",
    },
    AssetClass {
        name: "Cold Chain",
        load: "3 to 15 kW",
        description: "Walk-in cold rooms and solar freezers that cut post-harvest losses for fish, dairy and fresh produce.",
    },
    AssetClass {
        name: "Irrigation",
        load: "1 to 10 kW",
        description: "Solar and grid-tied pumps that unlock dry season cultivation and multiple harvests per year.",
    },
    AssetClass {
        name: "E-Mobility",
        load: "2 to 8 kW",
        description: "Electric tricycles and charging points that move produce from farm gate to market.",
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQS: [Faq; 3] = [
    Faq {
        question: "How do you handle credit risk in remote areas?",
        answer: "We utilize a three-layered approach: rigorous upfront vetting via Agronomie's agricultural data, mandatory digital payment collection, and IoT-enabled remote lockout capabilities for non-compliant assets.",
    },
    Faq {
        question: "Are the machines AC or DC powered?",
        answer: "Our portfolio is grid-agnostic. We provide equipment tailored to the specific electrical architecture of the site, whether it's a 230V AC mini-grid or specialized 48V/96V DC solar systems.",
    },
    Faq {
        question: "What happens when a machine breaks down?",
        answer: "We maintain a hub-and-spoke O&M model. Our central operations center tracks performance telemetry, while localized rapid response teams handle physical repairs and spare parts inventory.",
    },
];

pub struct Slide {
    pub title: &'static str,
    pub kicker: &'static str,
    pub desc: &'static str,
}

pub static ABOUT_SLIDES: [Slide; 3] = [
    Slide {
        title: "Deploy",
        kicker: "01 / Infrastructure",
        desc: "Infrastructure that lasts beyond the first harvest. We build resilient systems tailored for rural environments.",
    },
    Slide {
        title: "Finance",
        kicker: "02 / Capital",
        desc: "Capital that understands the rhythm of agriculture. Flexible terms aligned with harvest cycles.",
    },
    Slide {
        title: "Manage",
        kicker: "03 / Operations",
        desc: "Operations that ensure assets never go dark. 24/7 monitoring and rapid response maintenance teams.",
    },
];
