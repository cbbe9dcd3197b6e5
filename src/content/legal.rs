use crate::scroll_spy::Section;

pub static TERMS_SECTIONS: [Section; 5] = [
    Section { id: "intro", number: "01", title: "Introduction" },
    Section { id: "data", number: "02", title: "Data Protection" },
    Section { id: "usage", number: "03", title: "Asset Usage" },
    Section { id: "intellect", number: "04", title: "Intellectual Property" },
    Section { id: "law", number: "05", title: "Governing Law" },
];

pub static PRIVACY_SECTIONS: [Section; 5] = [
    Section { id: "collection", number: "01", title: "Data Collection" },
    Section { id: "processing", number: "02", title: "Data Processing" },
    Section { id: "iot", number: "03", title: "IoT & Telemetry" },
    Section { id: "sharing", number: "04", title: "Information Sharing" },
    Section { id: "rights", number: "05", title: "User Rights" },
];

pub static COOKIE_SECTIONS: [Section; 4] = [
    Section { id: "intro", number: "01", title: "What Are Cookies?" },
    Section { id: "usage", number: "02", title: "How We Use Them" },
    Section { id: "types", number: "03", title: "Types of Cookies" },
    Section { id: "management", number: "04", title: "Manage Preferences" },
];

pub static TEAM_SECTIONS: [Section; 3] = [
    Section { id: "executive", number: "01", title: "Executive" },
    Section { id: "board", number: "02", title: "Board of Directors" },
    Section { id: "members", number: "03", title: "Members" },
];

pub static PROJECT_SECTIONS: [Section; 5] = [
    Section { id: "context", number: "01", title: "Context" },
    Section { id: "technical", number: "02", title: "Technical Data" },
    Section { id: "impact", number: "03", title: "Impact" },
    Section { id: "media", number: "04", title: "Media" },
    Section { id: "lifecycle", number: "05", title: "Lifecycle" },
];

/// Body copy for one legal section, keyed by the section id.
#[derive(Debug, PartialEq)]
pub struct Clause {
    pub section: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub static TERMS_CLAUSES: [Clause; 5] = [
    Clause { section: "intro", paragraphs: &[
        "These terms govern your use of the AgAsset Co website and any information, tools or services made available through it. By accessing the site you agree to be bound by them.",
        "AgAsset Co finances productive-use assets for rural enterprises. Nothing on this site constitutes an offer of credit or an investment solicitation.",
    ] },
    Clause { section: "data", paragraphs: &[
        "We process personal data in accordance with the Nigeria Data Protection Act and our Privacy Policy. You are responsible for the accuracy of any information you submit through our forms.",
    ] },
    Clause { section: "usage", paragraphs: &[
        "Financed assets remain the property of the relevant AgAsset special purpose vehicle until the final installment is paid. Tampering with telemetry or lockout hardware is a material breach of any lease agreement.",
        "Project figures published on this site are indicative and may be revised as monitoring data is reconciled.",
    ] },
    Clause { section: "intellect", paragraphs: &[
        "All content, trademarks, imagery and data visualisations on this site are owned by or licensed to AgAsset Co. You may not reproduce them without written permission.",
    ] },
    Clause { section: "law", paragraphs: &[
        "These terms are governed by the laws of the Federal Republic of Nigeria. Disputes are subject to the exclusive jurisdiction of the courts of Lagos State.",
    ] },
];

pub static PRIVACY_CLAUSES: [Clause; 5] = [
    Clause { section: "collection", paragraphs: &[
        "We collect the information you give us through contact and partnership forms, including your name, organisation, email address and message.",
        "We also collect limited technical data such as browser type and pages visited, subject to your cookie preferences.",
    ] },
    Clause { section: "processing", paragraphs: &[
        "Personal data is processed only to respond to enquiries, assess partnership opportunities and meet our legal obligations. We do not sell personal data.",
    ] },
    Clause { section: "iot", paragraphs: &[
        "Financed assets report operational telemetry such as runtime, energy draw and location. This data belongs to the asset's SPV and is used for maintenance, credit monitoring and impact reporting.",
        "Telemetry is linked to an individual only where that person is the lessee of the asset.",
    ] },
    Clause { section: "sharing", paragraphs: &[
        "We share information with investors, mini-grid partners and service providers only as needed to operate the assets they are involved with, and always under confidentiality obligations.",
    ] },
    Clause { section: "rights", paragraphs: &[
        "You may request access to, correction of, or deletion of your personal data at any time by contacting privacy@agasset.co.",
    ] },
];

pub static COOKIE_CLAUSES: [Clause; 4] = [
    Clause { section: "intro", paragraphs: &[
        "Cookies are small text files stored by your browser. They let a site remember your actions and preferences over a period of time.",
    ] },
    Clause { section: "usage", paragraphs: &[
        "We use cookies to remember your consent choice, understand how visitors use the site and improve its performance.",
    ] },
    Clause { section: "types", paragraphs: &[
        "Essential cookies are required for the site to function and cannot be switched off.",
        "Analytics cookies help us count visits and traffic sources. They are only set if you accept non-essential cookies.",
    ] },
    Clause { section: "management", paragraphs: &[
        "Your choice is stored in your browser. Clearing your browser storage resets it and the consent banner will ask again on your next visit.",
    ] },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn ids_unique(sections: &[Section]) -> bool {
        sections
            .iter()
            .enumerate()
            .all(|(i, a)| sections.iter().skip(i + 1).all(|b| b.id != a.id))
    }

    #[test]
    fn section_ids_are_unique_per_page() {
        let tables: [&[Section]; 5] = [&TERMS_SECTIONS, &PRIVACY_SECTIONS, &COOKIE_SECTIONS, &TEAM_SECTIONS, &PROJECT_SECTIONS];
        for table in tables {
            assert!(ids_unique(table));
        }
    }

    #[test]
    fn every_clause_has_a_section() {
        let pairs: [(&[Section], &[Clause]); 3] = [
            (&TERMS_SECTIONS, &TERMS_CLAUSES),
            (&PRIVACY_SECTIONS, &PRIVACY_CLAUSES),
            (&COOKIE_SECTIONS, &COOKIE_CLAUSES),
        ];
        for (sections, clauses) in pairs {
            assert_eq!(sections.len(), clauses.len());
            for (section, clause) in sections.iter().zip(clauses) {
                assert_eq!(section.id, clause.section);
            }
        }
    }
}
