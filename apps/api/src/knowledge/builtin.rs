// Static career table. Keyword sets follow the original flat rule table,
// except the bare "it" education keyword, which matched inside ordinary words
// ("with", "writing") and is spelled out as "information technology" here.

use super::{CareerDomain, JobDescriptor};

pub(super) fn domains() -> Vec<CareerDomain> {
    vec![
        technology(),
        writing_and_media(),
        business(),
        health_and_science(),
        design_and_arts(),
    ]
}

fn technology() -> CareerDomain {
    CareerDomain::new(
        "Technology",
        &["programming", "coding", "software", "computer science", "developer", "engineering"],
        &["computer science", "engineering", "technology", "information technology"],
        vec![
            JobDescriptor::new(
                "Software Engineer",
                "Designs, builds and maintains software systems and applications.",
                &["Programming", "Data structures", "Testing", "Version control"],
                "Strong demand across nearly every industry.",
                "Team-based, often hybrid or remote.",
            ),
            JobDescriptor::new(
                "Full Stack Developer",
                "Builds both the user-facing and server side of web applications.",
                &["JavaScript", "APIs", "Databases", "UI frameworks"],
                "Steady growth as more products move to the web.",
                "Product teams, frequent iteration.",
            ),
            JobDescriptor::new(
                "Data Scientist",
                "Turns raw data into models and insights that drive decisions.",
                &["Statistics", "Python", "Machine learning", "Data visualization"],
                "One of the fastest-growing technical roles.",
                "Analytical, mixes independent research with stakeholder meetings.",
            ),
            JobDescriptor::new(
                "DevOps Engineer",
                "Automates infrastructure, deployment and monitoring of services.",
                &["Linux", "CI/CD", "Cloud platforms", "Scripting"],
                "High demand as companies adopt cloud infrastructure.",
                "On-call rotations, close collaboration with developers.",
            ),
            JobDescriptor::new(
                "Machine Learning Engineer",
                "Takes machine learning models from prototype to production.",
                &["Python", "Deep learning frameworks", "Model deployment", "Math"],
                "Rapid growth driven by AI adoption.",
                "Research-adjacent engineering, small specialized teams.",
            ),
        ],
    )
}

fn writing_and_media() -> CareerDomain {
    CareerDomain::new(
        "Writing & Media",
        &["writing", "communication", "language", "content", "media"],
        &["english", "journalism", "communications", "media"],
        vec![
            JobDescriptor::new(
                "Content Writer",
                "Writes articles, blog posts and web copy for a target audience.",
                &["Writing", "Research", "SEO basics", "Editing"],
                "Stable demand, strongest in digital marketing.",
                "Often freelance or remote, deadline driven.",
            ),
            JobDescriptor::new(
                "Technical Writer",
                "Explains complex products through documentation and guides.",
                &["Clear writing", "Technical literacy", "Information design"],
                "Growing alongside the software industry.",
                "Works closely with engineers and product teams.",
            ),
            JobDescriptor::new(
                "Journalist",
                "Investigates and reports news and stories for the public.",
                &["Interviewing", "Fact-checking", "Storytelling"],
                "Competitive, shifting toward digital outlets.",
                "Fast-paced, irregular hours, field work.",
            ),
            JobDescriptor::new(
                "Content Strategist",
                "Plans what content an organization publishes and why.",
                &["Audience research", "Analytics", "Editorial planning"],
                "Growing as brands invest in owned media.",
                "Cross-functional, planning heavy.",
            ),
            JobDescriptor::new(
                "Copywriter",
                "Writes persuasive copy for advertising and marketing campaigns.",
                &["Persuasive writing", "Brand voice", "Creativity"],
                "Steady demand in agencies and in-house teams.",
                "Collaborative with designers, campaign cycles.",
            ),
        ],
    )
}

fn business() -> CareerDomain {
    CareerDomain::new(
        "Business",
        &["business", "management", "finance", "marketing", "sales"],
        &["business", "finance", "economics", "marketing"],
        vec![
            JobDescriptor::new(
                "Business Analyst",
                "Bridges business needs and technical solutions through analysis.",
                &["Requirements gathering", "Data analysis", "Communication"],
                "Consistent demand in most sectors.",
                "Meeting heavy, office or hybrid.",
            ),
            JobDescriptor::new(
                "Marketing Manager",
                "Plans and runs campaigns that grow a brand and its customers.",
                &["Campaign planning", "Analytics", "Budgeting", "Leadership"],
                "Growing with digital marketing channels.",
                "Leads a team, coordinates with sales and product.",
            ),
            JobDescriptor::new(
                "Financial Analyst",
                "Evaluates financial data to guide investment and budget decisions.",
                &["Financial modeling", "Spreadsheets", "Accounting"],
                "Steady growth, strong in banking and corporate finance.",
                "Detail oriented, reporting cycles.",
            ),
            JobDescriptor::new(
                "Project Manager",
                "Keeps projects on scope, on time and on budget.",
                &["Planning", "Risk management", "Stakeholder communication"],
                "In demand across industries.",
                "Coordination heavy, many stakeholders.",
            ),
            JobDescriptor::new(
                "Sales Manager",
                "Leads a sales team and owns revenue targets.",
                &["Negotiation", "Coaching", "CRM tools"],
                "Stable, compensation tied to performance.",
                "Target driven, client facing.",
            ),
        ],
    )
}

fn health_and_science() -> CareerDomain {
    CareerDomain::new(
        "Health & Science",
        &["health", "medical", "biology", "science", "research"],
        &["biology", "medicine", "health", "science"],
        vec![
            JobDescriptor::new(
                "Medical Researcher",
                "Runs studies that improve understanding and treatment of disease.",
                &["Research methods", "Statistics", "Lab techniques"],
                "Growing with biomedical funding.",
                "Lab or clinical settings, long project horizons.",
            ),
            JobDescriptor::new(
                "Healthcare Administrator",
                "Manages operations of hospitals, clinics and care networks.",
                &["Operations", "Healthcare regulation", "Leadership"],
                "Strong growth as healthcare systems expand.",
                "Office based, people management.",
            ),
            JobDescriptor::new(
                "Biotech Researcher",
                "Develops biological products and technologies in industry labs.",
                &["Molecular biology", "Experimental design", "Data analysis"],
                "Fast-growing sector with startup activity.",
                "Lab work in small research teams.",
            ),
            JobDescriptor::new(
                "Data Scientist",
                "Analyzes clinical and biological datasets to support research.",
                &["Statistics", "Python or R", "Domain knowledge"],
                "High demand as health data grows.",
                "Analytical, works with clinicians and researchers.",
            ),
            JobDescriptor::new(
                "Public Health Specialist",
                "Designs programs that protect and improve community health.",
                &["Epidemiology", "Program evaluation", "Communication"],
                "Steady demand in government and nonprofits.",
                "Mix of field work and policy.",
            ),
        ],
    )
}

fn design_and_arts() -> CareerDomain {
    CareerDomain::new(
        "Design & Arts",
        &["design", "art", "creative", "visual", "graphic"],
        &["design", "art", "fine arts", "visual"],
        vec![
            JobDescriptor::new(
                "UX/UI Designer",
                "Designs how digital products look, feel and behave.",
                &["User research", "Prototyping", "Design tools"],
                "Strong growth alongside software products.",
                "Collaborative with product and engineering.",
            ),
            JobDescriptor::new(
                "Graphic Designer",
                "Creates visual assets for print, web and brand identity.",
                &["Typography", "Layout", "Design software"],
                "Stable, increasingly digital.",
                "Agency, in-house or freelance.",
            ),
            JobDescriptor::new(
                "Product Designer",
                "Owns the end-to-end design of product features.",
                &["Interaction design", "Systems thinking", "Prototyping"],
                "Growing in technology companies.",
                "Embedded in product teams.",
            ),
            JobDescriptor::new(
                "Art Director",
                "Sets the visual style of campaigns, publications or productions.",
                &["Creative direction", "Team leadership", "Visual storytelling"],
                "Competitive, senior creative track.",
                "Leads creative teams, client facing.",
            ),
            JobDescriptor::new(
                "Visual Designer",
                "Crafts the visual language of brands and interfaces.",
                &["Color theory", "Iconography", "Brand systems"],
                "Steady demand in digital products.",
                "Studio or product team settings.",
            ),
        ],
    )
}
