//! Privacy policy and terms of service.

use yew::prelude::*;

use crate::components::footer::{copyright_line, current_year};
use crate::config;
use crate::navigation::scroll_to_top;

const LAST_UPDATED: &str = "January 18, 2026";

enum Block {
    Text(&'static str),
    Subheading(&'static str),
    List(&'static [&'static str]),
    Labeled(&'static [(&'static str, &'static str)]),
    ContactCard,
}

struct Clause {
    heading: &'static str,
    blocks: &'static [Block],
}

const PRIVACY: &[Clause] = &[
    Clause {
        heading: "Introduction",
        blocks: &[Block::Text(
            "Sachin Chiplunkar (\"we,\" \"our,\" or \"us\") respects your privacy and is committed to protecting \
             your personal data. This privacy policy explains how we collect, use, disclose, and safeguard your \
             information when you visit our website sachinchiplunkar.com (the \"Site\") or engage with our \
             consulting services.",
        )],
    },
    Clause {
        heading: "Information We Collect",
        blocks: &[
            Block::Subheading("Personal Information"),
            Block::Text("When you book a discovery call or contact us, we may collect:"),
            Block::List(&[
                "Name and job title",
                "Email address",
                "Company name and size",
                "Phone number (if provided)",
                "Information about your business challenges shared during consultations",
            ]),
            Block::Subheading("Automatically Collected Information"),
            Block::Text("When you visit our Site, we may automatically collect:"),
            Block::List(&[
                "IP address and location data",
                "Browser type and version",
                "Device information",
                "Pages visited and time spent",
                "Referral source",
            ]),
        ],
    },
    Clause {
        heading: "How We Use Your Information",
        blocks: &[
            Block::Text("We use the information we collect to:"),
            Block::List(&[
                "Provide and deliver our consulting services",
                "Schedule and conduct discovery calls",
                "Respond to your inquiries and requests",
                "Send relevant communications about our services",
                "Improve our website and services",
                "Analyze website usage and trends",
                "Comply with legal obligations",
            ]),
        ],
    },
    Clause {
        heading: "Information Sharing",
        blocks: &[
            Block::Text("We do not sell your personal information. We may share your information with:"),
            Block::Labeled(&[
                (
                    "Service Providers",
                    "Third-party services that help us operate our business (e.g., Cal.com for scheduling, analytics providers)",
                ),
                ("Legal Requirements", "When required by law or to protect our rights"),
                ("Business Transfers", "In connection with any merger or acquisition"),
            ]),
        ],
    },
    Clause {
        heading: "Cookies and Tracking",
        blocks: &[Block::Text(
            "We use cookies and similar tracking technologies to enhance your experience on our Site. These help \
             us understand how you use our Site and improve our services. You can control cookies through your \
             browser settings. We use privacy-focused analytics that respect user privacy and do not track \
             individual users across websites.",
        )],
    },
    Clause {
        heading: "Data Security",
        blocks: &[Block::Text(
            "We implement appropriate technical and organizational measures to protect your personal information \
             against unauthorized access, alteration, disclosure, or destruction. However, no method of \
             transmission over the Internet is 100% secure, and we cannot guarantee absolute security.",
        )],
    },
    Clause {
        heading: "Data Retention",
        blocks: &[Block::Text(
            "We retain your personal information for as long as necessary to fulfill the purposes outlined in this \
             privacy policy, unless a longer retention period is required or permitted by law. Client engagement \
             data is typically retained for 7 years for business and legal purposes.",
        )],
    },
    Clause {
        heading: "Your Rights",
        blocks: &[
            Block::Text("Depending on your location, you may have the right to:"),
            Block::List(&[
                "Access the personal information we hold about you",
                "Request correction of inaccurate information",
                "Request deletion of your personal information",
                "Object to or restrict processing of your information",
                "Data portability",
                "Withdraw consent at any time",
            ]),
            Block::Text("To exercise any of these rights, please contact us at hello@sachinchiplunkar.com."),
        ],
    },
    Clause {
        heading: "International Transfers",
        blocks: &[Block::Text(
            "Your information may be transferred to and processed in countries other than your country of \
             residence, including the United States and India. We ensure appropriate safeguards are in place for \
             such transfers in compliance with applicable data protection laws.",
        )],
    },
    Clause {
        heading: "Third-Party Links",
        blocks: &[Block::Text(
            "Our Site may contain links to third-party websites (e.g., LinkedIn, Cal.com). We are not responsible \
             for the privacy practices of these external sites. We encourage you to review their privacy policies.",
        )],
    },
    Clause {
        heading: "Children's Privacy",
        blocks: &[Block::Text(
            "Our services are not directed to individuals under 18 years of age. We do not knowingly collect \
             personal information from children.",
        )],
    },
    Clause {
        heading: "Changes to This Policy",
        blocks: &[Block::Text(
            "We may update this privacy policy from time to time. We will notify you of any changes by posting the \
             new policy on this page and updating the \"Last updated\" date.",
        )],
    },
    Clause {
        heading: "Contact Us",
        blocks: &[
            Block::Text("If you have questions about this privacy policy or our data practices, please contact us at:"),
            Block::ContactCard,
        ],
    },
];

const TERMS: &[Clause] = &[
    Clause {
        heading: "Agreement to Terms",
        blocks: &[Block::Text(
            "By accessing or using the website sachinchiplunkar.com (the \"Site\") or engaging with consulting \
             services provided by Sachin Chiplunkar (\"we,\" \"our,\" or \"us\"), you agree to be bound by these \
             Terms of Service. If you do not agree to these terms, please do not use our Site or services.",
        )],
    },
    Clause {
        heading: "Services Description",
        blocks: &[
            Block::Text(
                "We provide Bio-Operational Transformation consulting services for manufacturing executives, \
                 including but not limited to:",
            ),
            Block::List(&[
                "90-Day Bio-Operational Transformation Programs",
                "Discovery Assessments",
                "Discovery Calls and Consultations",
                "Operational Excellence Advisory",
                "Leadership Performance Optimization",
                "AI Implementation Guidance",
            ]),
        ],
    },
    Clause {
        heading: "Engagement Terms",
        blocks: &[
            Block::Subheading("Discovery Calls"),
            Block::Text(
                "Discovery calls are complimentary 45-minute consultations. By booking a discovery call, you agree to:",
            ),
            Block::List(&[
                "Provide accurate information about yourself and your company",
                "Attend the scheduled call on time or reschedule with reasonable notice",
                "Engage in good faith discussion about your business challenges",
            ]),
            Block::Subheading("Consulting Engagements"),
            Block::Text(
                "Formal consulting engagements are governed by separate written agreements that specify scope, \
                 deliverables, timelines, fees, and other terms. These Terms of Service apply in addition to any \
                 engagement-specific agreements.",
            ),
        ],
    },
    Clause {
        heading: "Fees and Payment",
        blocks: &[
            Block::Text("Our consulting services are priced as follows (subject to change):"),
            Block::Labeled(&[
                ("Discovery Calls", "Complimentary"),
                ("Discovery Assessments", "$5,000 - $8,000 USD"),
                ("90-Day Transformation Program", "$75,000 - $125,000 USD"),
            ]),
            Block::Text(
                "Specific pricing, payment terms, and schedules will be outlined in individual engagement \
                 agreements. All fees are non-refundable unless otherwise specified in writing.",
            ),
        ],
    },
    Clause {
        heading: "Intellectual Property",
        blocks: &[
            Block::Subheading("Our Content"),
            Block::Text(
                "All content on this Site, including text, graphics, logos, methodologies, frameworks, and \
                 software, is the property of Sachin Chiplunkar and is protected by intellectual property laws. You \
                 may not reproduce, distribute, or create derivative works without our express written permission.",
            ),
            Block::Subheading("Client Materials"),
            Block::Text(
                "Any materials, data, or information you provide to us during an engagement remain your property. \
                 You grant us a limited license to use such materials solely for the purpose of providing our \
                 services to you.",
            ),
        ],
    },
    Clause {
        heading: "Confidentiality",
        blocks: &[Block::Text(
            "We treat all client information as confidential. We will not disclose your business information, \
             strategies, or data to third parties without your consent, except as required by law. Specific \
             confidentiality terms may be included in individual engagement agreements.",
        )],
    },
    Clause {
        heading: "Disclaimer of Warranties",
        blocks: &[
            Block::Text(
                "Our services are provided on an \"as is\" and \"as available\" basis. While we strive to deliver \
                 exceptional value, we make no warranties or guarantees regarding:",
            ),
            Block::List(&[
                "Specific business outcomes or results",
                "Revenue increases or cost savings",
                "Timelines for achieving results",
                "Uninterrupted or error-free service",
            ]),
            Block::Text(
                "Past results and testimonials do not guarantee future performance. Results depend on many factors \
                 including your organization's commitment, market conditions, and implementation quality.",
            ),
        ],
    },
    Clause {
        heading: "Limitation of Liability",
        blocks: &[Block::Text(
            "To the maximum extent permitted by law, Sachin Chiplunkar shall not be liable for any indirect, \
             incidental, special, consequential, or punitive damages, including but not limited to loss of profits, \
             data, or business opportunities, arising out of or related to these terms or our services. Our total \
             liability shall not exceed the fees paid by you for the specific service giving rise to the claim.",
        )],
    },
    Clause {
        heading: "Indemnification",
        blocks: &[Block::Text(
            "You agree to indemnify and hold harmless Sachin Chiplunkar from any claims, damages, losses, or \
             expenses (including reasonable attorney fees) arising from your use of our Site or services, your \
             violation of these terms, or your violation of any rights of a third party.",
        )],
    },
    Clause {
        heading: "Use of Site",
        blocks: &[
            Block::Text("When using our Site, you agree not to:"),
            Block::List(&[
                "Use the Site for any unlawful purpose",
                "Attempt to gain unauthorized access to any part of the Site",
                "Interfere with or disrupt the Site's operation",
                "Collect user information without consent",
                "Use automated systems to access the Site without permission",
                "Impersonate any person or entity",
            ]),
        ],
    },
    Clause {
        heading: "Third-Party Links",
        blocks: &[Block::Text(
            "Our Site may contain links to third-party websites or services. We are not responsible for the \
             content, terms, or practices of these external sites. Your use of third-party sites is at your own risk.",
        )],
    },
    Clause {
        heading: "Termination",
        blocks: &[Block::Text(
            "We reserve the right to terminate or suspend your access to our Site or services at any time, without \
             notice, for conduct that we believe violates these terms or is harmful to us or other users. \
             Termination of consulting engagements is governed by the specific engagement agreement.",
        )],
    },
    Clause {
        heading: "Governing Law",
        blocks: &[Block::Text(
            "These terms shall be governed by and construed in accordance with the laws of the United States, \
             without regard to its conflict of law provisions. Any disputes arising from these terms shall be \
             resolved through binding arbitration or in the courts of competent jurisdiction.",
        )],
    },
    Clause {
        heading: "Changes to Terms",
        blocks: &[Block::Text(
            "We reserve the right to modify these terms at any time. We will notify users of significant changes \
             by posting a notice on our Site. Your continued use of the Site after changes constitutes acceptance \
             of the modified terms.",
        )],
    },
    Clause {
        heading: "Severability",
        blocks: &[Block::Text(
            "If any provision of these terms is found to be unenforceable or invalid, that provision shall be \
             limited or eliminated to the minimum extent necessary, and the remaining provisions shall remain in \
             full force and effect.",
        )],
    },
    Clause {
        heading: "Contact Us",
        blocks: &[
            Block::Text("If you have questions about these Terms of Service, please contact us at:"),
            Block::ContactCard,
        ],
    },
];

fn render_block(block: &Block) -> Html {
    match block {
        Block::Text(text) => html! { <p>{*text}</p> },
        Block::Subheading(text) => html! { <h3>{*text}</h3> },
        Block::List(items) => html! {
            <ul>{ for items.iter().map(|item| html! { <li>{*item}</li> }) }</ul>
        },
        Block::Labeled(items) => html! {
            <ul>
                { for items.iter().map(|(label, text)| html! {
                    <li><strong>{format!("{}:", label)}</strong>{" "}{*text}</li>
                }) }
            </ul>
        },
        Block::ContactCard => html! {
            <div class="contact-card">
                <p class="text-white">{config::SITE_OWNER}</p>
                <p>{format!("Email: {}", config::CONTACT_EMAIL)}</p>
                <p>{format!("Website: {}", config::SITE_DOMAIN)}</p>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    title: &'static str,
    #[prop_or_default]
    children: Children,
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    use_effect_with_deps(
        |_| {
            scroll_to_top(false);
            || ()
        },
        (),
    );

    html! {
        <div class="legal-page">
            <header class="legal-header">
                <div class="container">
                    <a href="/" class="back-link">{"← Back to Home"}</a>
                </div>
            </header>
            <main class="container legal-body">
                <h1>{props.title}</h1>
                <p class="muted">{format!("Last updated: {}", LAST_UPDATED)}</p>
                <div class="legal-prose">
                    { for props.children.iter() }
                </div>
            </main>
            <footer class="legal-footer">
                <p>{copyright_line(current_year())}</p>
            </footer>
        </div>
    }
}

fn render_clauses(clauses: &'static [Clause]) -> Html {
    html! {
        { for clauses.iter().map(|clause| html! {
            <section key={clause.heading}>
                <h2>{clause.heading}</h2>
                { for clause.blocks.iter().map(render_block) }
            </section>
        }) }
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalPage title="Privacy Policy">{ render_clauses(PRIVACY) }</LegalPage>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <LegalPage title="Terms of Service">{ render_clauses(TERMS) }</LegalPage>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headings(clauses: &[Clause]) -> Vec<&'static str> {
        clauses.iter().map(|c| c.heading).collect()
    }

    #[test]
    fn both_documents_end_with_contact_card() {
        for clauses in [PRIVACY, TERMS] {
            let last = clauses.last().map(|c| c.heading);
            assert_eq!(last, Some("Contact Us"));
            assert!(matches!(clauses.last().and_then(|c| c.blocks.last()), Some(Block::ContactCard)));
        }
    }

    #[test]
    fn clause_headings_are_unique() {
        for clauses in [PRIVACY, TERMS] {
            let mut seen = headings(clauses);
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), clauses.len());
        }
    }

    #[test]
    fn privacy_mentions_contact_address() {
        let mentions = PRIVACY.iter().flat_map(|c| c.blocks.iter()).any(|block| match block {
            Block::Text(text) => text.contains(config::CONTACT_EMAIL),
            _ => false,
        });
        assert!(mentions);
    }
}
