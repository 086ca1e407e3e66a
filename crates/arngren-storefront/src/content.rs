//! Static copy: reviews, FAQ and the policy pages.

use arngren_core::View;

pub struct Review {
    pub quote: &'static str,
    pub name: &'static str,
    pub company: &'static str,
}

pub const REVIEWS: &[Review] = &[
    Review {
        quote: "The electric unicycle is a game-changer... It's like living in the future.",
        name: "A. Johansen",
        company: "Tech Innovators AS",
    },
    Review {
        quote: "I bought a build-your-own robot kit for my daughter. Fantastic time putting it together.",
        name: "Maria Berg",
        company: "Future Coders Academy",
    },
    Review {
        quote: "Their customer service is surprisingly good for such a quirky site... got a detailed, helpful response within hours.",
        name: "Lars Eriksen",
        company: "Hobbyist's Corner",
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Do you ship internationally?",
        answer: "Yes, we ship to most countries worldwide. Shipping costs and times vary depending on the destination and the size of the product.",
    },
    Faq {
        question: "What is the warranty on your electric vehicles?",
        answer: "Our electric vehicles come with a one-year manufacturer's warranty covering the motor and battery.",
    },
    Faq {
        question: "Can I get a license plate for the electric cars?",
        answer: "Some of our electric vehicles are street-legal and can be registered. The product description will always specify.",
    },
    Faq {
        question: "Are the 'Build Your Own' kits suitable for beginners?",
        answer: "It depends on the kit. Each product page has a difficulty rating and a list of required skills.",
    },
];

/// Accordion state after clicking question `index`: at most one answer open.
pub fn toggle_faq(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) {
        None
    } else {
        Some(index)
    }
}

/// A paragraph of a policy page, optionally under a heading.
pub struct Block {
    pub heading: Option<&'static str>,
    pub body: &'static str,
}

pub struct InfoPage {
    pub title: &'static str,
    pub blocks: &'static [Block],
}

const SHIPPING: InfoPage = InfoPage {
    title: "Shipping & Returns",
    blocks: &[
        Block {
            heading: Some("Shipping Policy"),
            body: "We ship our unique gadgets and vehicles across Norway and to select international destinations. Shipping for standard items typically takes 3-5 business days within Norway. For larger items like electric cars or flying machines, a special delivery will be arranged, and we will contact you within 48 hours of your purchase to coordinate.",
        },
        Block {
            heading: Some("Returns Policy"),
            body: "You can return most items within 14 days of receipt for a full refund, provided they are in unused, original condition with all packaging intact. \"Build Your Own\" kits cannot be returned once the packaging has been opened. To initiate a return, please use the contact form to get in touch with our support team, and we will guide you through the process.",
        },
    ],
};

const WARRANTY: InfoPage = InfoPage {
    title: "Warranty Information",
    blocks: &[
        Block {
            heading: Some("Our Commitment"),
            body: "All products sold on Arngren.net come with a standard 12-month warranty against manufacturing defects. This warranty is valid from the date of purchase and covers faults in materials and workmanship.",
        },
        Block {
            heading: Some("Electric Vehicles"),
            body: "Electric vehicles, including bikes, scooters, and cars, come with a specific 12-month warranty on the motor and battery system. This does not cover normal wear and tear, such as tire or brake pad replacement, or any damage caused by improper use or accidents.",
        },
        Block {
            heading: Some("Claim Process"),
            body: "If you believe your product has a fault covered by warranty, please contact us immediately with your order number and a description of the issue. We may request photos or videos to assess the problem. If a defect is confirmed, we will arrange for a repair, replacement, or refund at our discretion.",
        },
    ],
};

const PRIVACY: InfoPage = InfoPage {
    title: "Privacy Policy",
    blocks: &[
        Block {
            heading: None,
            body: "Your privacy is important to us. It is ARNGREN.net's policy to respect your privacy regarding any information we may collect from you across our website.",
        },
        Block {
            heading: None,
            body: "We only ask for personal information when we truly need it to provide a service to you. We collect it by fair and lawful means, with your knowledge and consent. We also let you know why we're collecting it and how it will be used.",
        },
        Block {
            heading: None,
            body: "We only retain collected information for as long as necessary to provide you with your requested service. What data we store, we'll protect within commercially acceptable means to prevent loss and theft, as well as unauthorized access, disclosure, copying, use or modification.",
        },
        Block {
            heading: None,
            body: "We don't share any personally identifying information publicly or with third-parties, except when required to by law.",
        },
    ],
};

const TERMS: InfoPage = InfoPage {
    title: "Terms of Service",
    blocks: &[
        Block {
            heading: None,
            body: "By accessing the website at ARNGREN.net, you are agreeing to be bound by these terms of service, all applicable laws and regulations, and agree that you are responsible for compliance with any applicable local laws.",
        },
        Block {
            heading: Some("Use License"),
            body: "Permission is granted to temporarily download one copy of the materials (information or software) on ARNGREN.net's website for personal, non-commercial transitory viewing only. This is the grant of a license, not a transfer of title.",
        },
        Block {
            heading: Some("Disclaimer"),
            body: "The materials on ARNGREN.net's website are provided on an 'as is' basis. ARNGREN.net makes no warranties, expressed or implied, and hereby disclaims and negates all other warranties including, without limitation, implied warranties or conditions of merchantability, fitness for a particular purpose, or non-infringement of intellectual property or other violation of rights.",
        },
    ],
};

/// The static page for `view`, if it is one.
pub fn info_page(view: View) -> Option<&'static InfoPage> {
    match view {
        View::Shipping => Some(&SHIPPING),
        View::Warranty => Some(&WARRANTY),
        View::Privacy => Some(&PRIVACY),
        View::Terms => Some(&TERMS),
        _ => None,
    }
}
