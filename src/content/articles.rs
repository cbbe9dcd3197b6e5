use crate::navigation::RecordId;
use crate::records::{Record, StaticId};

#[derive(Debug, PartialEq)]
pub struct Article {
    pub id: StaticId,
    pub category: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub image: &'static str,
    pub excerpt: &'static str,
    pub body: &'static [&'static str],
    pub quote: &'static str,
    pub author: &'static str,
    pub sub_title: &'static str,
    pub sub_content: &'static str,
    pub looking_ahead: &'static str,
}

impl Record for Article {
    fn matches(&self, id: &RecordId) -> bool {
        self.id.matches(id)
    }
}

/// Carousel entries on the news page. Each points at an article.
pub struct FeaturedSlide {
    pub article: StaticId,
    pub title: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub image: &'static str,
    pub excerpt: &'static str,
}

const SERIES_A_BODY: &[&str] = &[
    "Energy access in rural Nigeria is undergoing a seismic shift. As diesel prices continue to fluctuate, demand for reliable, cost-effective power for processing clusters has never been higher. AgAsset Co is proud to announce a pivotal moment in our mission to finance productive assets across the continent.",
    "This capital injection will directly fund the deployment of 500 new Productive Use hubs across five key states, creating a contiguous corridor of energy-linked agro-processing.",
];

const CEO_QUOTE: &str = "We are not just financing machines; we are building the economic layer on top of rural energy. Uptime, repayment and data are our currency.";
const CEO: &str = "OBIORA OKOYE, CEO";

pub static ARTICLES: [Article; 7] = [
    Article {
        id: StaticId::Num(1),
        category: "EQUIPMENT",
        title: "Introducing the TANKVOLT T22-Pro",
        date: "June 15, 2025",
        image: "/assets/tankvolt.jpeg",
        excerpt: "The next evolution in heavy-duty electric logistics assets, capable of bridging peak gaps.",
        body: SERIES_A_BODY,
        quote: CEO_QUOTE,
        author: CEO,
        sub_title: "Powering the AgAsset Ecosystem",
        sub_content: "Central to this expansion is the rollout of our next-generation battery technology, optimised for the rigorous demands of commercial riders and processors.",
        looking_ahead: "We are also launching an Operator Welfare Initiative, providing health cover and safety training for every operator on our platform.",
    },
    Article {
        id: StaticId::Num(2),
        category: "STRATEGY",
        title: "Kenya Expansion Plans Finalized",
        date: "May 30, 2025",
        image: "https://images.unsplash.com/photo-1464226184884-fa280b87c399?q=80&w=2940&auto=format&fit=crop",
        excerpt: "AgAsset Co is bringing its market-leading PUE financing technology to Nairobi in Q4 2025.",
        body: &[
            "After three years of operations in Northern Nigeria, AgAsset Co will open its first East African office in Nairobi. The expansion follows a six-month feasibility study across dairy, horticulture and grain clusters in the Rift Valley.",
            "The Kenyan programme will reuse the lease-to-own structure proven in Jigawa, with IoT-secured credit enhancement adapted to local mobile-money repayment rails.",
        ],
        quote: "Kenya has the mini-grid density and the mobile payments backbone. What it lacks is asset finance that understands the harvest calendar.",
        author: "SARAH VAN DORN, CEO",
        sub_title: "A Second Regional Hub",
        sub_content: "Initial deployments will focus on milk chilling and solar irrigation, two use cases with strong daytime load profiles for partner mini-grids.",
        looking_ahead: "The first 50 assets are scheduled for commissioning before the end of the year, with a pipeline of 400 more under credit review.",
    },
    Article {
        id: StaticId::Num(3),
        category: "TECHNOLOGY",
        title: "AI-Driven Asset Health Monitoring",
        date: "May 12, 2025",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=2940&auto=format&fit=crop",
        excerpt: "New IoT firmware update allows for predictive maintenance alerts before machinery downtime.",
        body: &[
            "Every asset in the AgAsset portfolio reports runtime, load and fault telemetry. The new firmware release turns that stream into predictive maintenance alerts.",
            "Field technicians now receive a work order up to ten days before a bearing or motor failure is likely, cutting unplanned downtime across the fleet.",
        ],
        quote: "An asset that never goes dark is an asset that always repays.",
        author: "MICHAEL ABARA, TECHNICAL DIRECTOR",
        sub_title: "From Telemetry to Action",
        sub_content: "Models are trained on two years of operating data from hullers, mills and cold rooms across 14 clusters.",
        looking_ahead: "Next quarter the same signals will feed directly into our credit scoring, rewarding well-maintained assets with better terms.",
    },
    Article {
        id: StaticId::Num(4),
        category: "IMPACT",
        title: "Rural Safety Initiative Launched",
        date: "April 20, 2025",
        image: "https://images.unsplash.com/photo-1532629345422-7515f3d16bb6?q=80&w=2940&auto=format&fit=crop",
        excerpt: "Training over 1,000 operators in safe industrial machinery handling across cluster zones.",
        body: &[
            "Productive machinery brings new risks to communities that have never operated it. Our safety initiative trains every operator before an asset is commissioned.",
        ],
        quote: "Safety training is part of the asset, not an add-on.",
        author: "FATIMA YUSUF, IMPACT DIRECTOR",
        sub_title: "Certified Operators",
        sub_content: "Operators receive a certificate recognised by our partner mini-grid developers and equipment suppliers.",
        looking_ahead: "Refresher courses will be delivered on site every six months.",
    },
    Article {
        id: StaticId::Num(5),
        category: "FINANCE",
        title: "AgAsset Co Secures New Series B",
        date: "March 15, 2025",
        image: "https://images.unsplash.com/photo-1625246333195-58197bd47f3b?q=80&w=2940&auto=format&fit=crop",
        excerpt: "Consolidating our position as the continent's primary productive infrastructure vehicle.",
        body: SERIES_A_BODY,
        quote: CEO_QUOTE,
        author: CEO,
        sub_title: "Capital for Scale",
        sub_content: "Proceeds will be held in ring-fenced SPVs, keeping investor exposure tied directly to performing assets.",
        looking_ahead: "The round positions us to deploy across five additional states by 2026.",
    },
    Article {
        id: StaticId::Num(6),
        category: "MILESTONES",
        title: "500 Assets Successfully Deployed",
        date: "February 28, 2025",
        image: "https://images.unsplash.com/photo-1600863073007-4228c2c842b0?q=80&w=2070&auto=format&fit=crop",
        excerpt: "A historic day as we cross the 500 asset threshold network-wide.",
        body: &[
            "Our 500th asset, a solar rice huller in Gwaram, was commissioned this week. Together the fleet has displaced over 1.2 million litres of diesel.",
        ],
        quote: "Five hundred machines, five hundred businesses.",
        author: CEO,
        sub_title: "What 500 Assets Mean",
        sub_content: "Over 2,000 direct jobs now depend on AgAsset-financed equipment.",
        looking_ahead: "The next milestone is 1,000 assets across two countries.",
    },
    Article {
        id: StaticId::Slug("solar-transition"),
        category: "FINANCE",
        title: "Financing the Solar Transition in Rural Clusters",
        date: "March 12, 2025",
        image: "https://images.unsplash.com/photo-1542601906990-b4d3fb7d5c73?q=80&w=2874&auto=format&fit=crop",
        excerpt: "New lease-to-own models are unlocking potential for over 5,000 smallholder farmers in Northern Nigeria.",
        body: SERIES_A_BODY,
        quote: CEO_QUOTE,
        author: CEO,
        sub_title: "Lease-to-Own at Cluster Scale",
        sub_content: "Installments are aligned with harvest cycles, so repayment follows cash flow instead of the calendar.",
        looking_ahead: "We expect cluster-level financing to become the default for mini-grid anchor loads.",
    },
];

pub static FEATURED: [FeaturedSlide; 3] = [
    FeaturedSlide {
        article: StaticId::Num(4),
        title: "Reducing post-harvest losses by 40% through localized preservation.",
        category: "CASE STUDY",
        date: "Feb 28, 2025",
        image: "https://images.unsplash.com/photo-1586771107445-d3ca888129ff?q=80&w=2944&auto=format&fit=crop",
        excerpt: "Our latest case study in Kaduna demonstrates how temperature-controlled logistics transforms vegetable value chains.",
    },
    FeaturedSlide {
        article: StaticId::Slug("solar-transition"),
        title: "Financing the Solar Transition in Rural Clusters.",
        category: "FINANCE",
        date: "Mar 05, 2025",
        image: "https://images.unsplash.com/photo-1508514177221-188b1cf16e9d?q=80&w=2944&auto=format&fit=crop",
        excerpt: "New lease-to-own models are unlocking potential for over 5,000 smallholder farmers in Northern Nigeria.",
    },
    FeaturedSlide {
        article: StaticId::Num(3),
        title: "The Future of IoT in Remote Asset Management.",
        category: "TECHNOLOGY",
        date: "Mar 12, 2025",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=2940&auto=format&fit=crop",
        excerpt: "Why real-time telemetry is the key to bankability and investor confidence in productive use energy.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{resolve, Resolution};

    #[test]
    fn news_card_two_resolves_to_kenya_article() {
        let resolution = resolve(&ARTICLES, Some(&RecordId::Number(2))).unwrap();
        assert!(matches!(resolution, Resolution::Found(_)));
        assert_eq!(resolution.record().title, "Kenya Expansion Plans Finalized");
    }

    #[test]
    fn unknown_article_shows_first() {
        let resolution = resolve(&ARTICLES, Some(&RecordId::from("f9"))).unwrap();
        assert!(resolution.is_fallback());
        assert_eq!(resolution.record().id, StaticId::Num(1));
    }

    #[test]
    fn every_featured_slide_points_at_an_article() {
        for slide in FEATURED.iter() {
            let id = slide.article.to_record_id();
            assert!(!resolve(&ARTICLES, Some(&id)).unwrap().is_fallback(), "{}", slide.title);
        }
    }

    #[test]
    fn article_ids_are_unique() {
        for (i, a) in ARTICLES.iter().enumerate() {
            assert!(ARTICLES.iter().skip(i + 1).all(|b| b.id != a.id));
        }
    }
}
