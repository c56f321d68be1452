//! Built-in presentation deck
//!
//! The Pulse Trading marketing-plan deck: 16 slides with scripted narration.
//! Spoken durations are the scripted speech lengths; reading buffers give the
//! viewer time to scan the slide after the narration ends.

use super::{Deck, Slide, SlideScript};
use once_cell::sync::Lazy;

pub static DECK: Lazy<Deck> = Lazy::new(|| Deck::new(SLIDES).expect("built-in deck is valid"));

static SLIDES: &[Slide] = &[
    Slide {
        index: 1,
        title: "Pulse Trading — Final Marketing Plan",
        bullets: &[
            "Data-driven, community-focused growth strategy",
            "$2.7B retail trading market opportunity",
            "Research findings, strategic framework, implementation roadmap",
            "Strong ROI case for investors",
        ],
        notes: "Welcome the audience and set the frame: a comprehensive, \
                data-driven strategy to scale the platform and deliver strong \
                ROI. Keep it under a minute before moving to the challenge.",
        script: SlideScript {
            slide_index: 1,
            speech_text: "Welcome to our Pulse Trading Final Marketing Plan. I'm excited \
                to present our comprehensive, data-driven strategy that positions Pulse \
                Trading to capture significant market share in the $2.7 billion retail \
                trading space. Over the next 15 minutes, we'll walk through our research \
                findings, strategic framework, and implementation roadmap that will \
                deliver strong ROI for investors. Let's begin with the market challenge \
                that sparked our innovative solution.",
            spoken_duration_secs: 35.0,
            reading_buffer_secs: 5.0,
        },
    },
    Slide {
        index: 2,
        title: "The Market Challenge",
        bullets: &[
            "Everyday investors are caught between two extremes",
            "Professional platforms: too complex and intimidating",
            "Basic apps: no community support, no data insights",
            "The gap is a $2.7B market opportunity",
            "Pulse Trading: real-time analytics plus social learning, mobile-first",
        ],
        notes: "Name the gap precisely: overwhelmed by institutional-grade \
                complexity on one side, underserved by basic apps on the other. \
                Pulse Trading bridges the divide in one seamless experience.",
        script: SlideScript {
            slide_index: 2,
            speech_text: "The retail trading market presents a clear opportunity, but \
                everyday investors face a fundamental problem: they're caught between \
                two extremes. On one side, professional trading platforms are too \
                complex and intimidating. On the other, basic apps lack the community \
                support and data insights that drive successful trading decisions. This \
                gap represents a $2.7 billion market opportunity. Our solution, Pulse \
                Trading, bridges this divide by delivering real-time analytics combined \
                with social learning in one seamless, mobile-first experience. This \
                foundation leads us to our comprehensive environmental analysis.",
            spoken_duration_secs: 50.0,
            reading_buffer_secs: 8.0,
        },
    },
    Slide {
        index: 3,
        title: "Environmental Analysis",
        bullets: &[
            "PESTELE and SWOT analyses of the market landscape",
            "85% of the target demographic prefers mobile-first solutions",
            "65% of investors value community features",
            "Regulatory change and competition are the headwinds",
            "Community-focused positioning captures the trend lines",
        ],
        notes: "Acknowledge the challenges (regulation, competitive pressure) \
                but land on the tailwinds: accelerating digital adoption and \
                the social trading trend directly favor our approach.",
        script: SlideScript {
            slide_index: 3,
            speech_text: "Our comprehensive PESTELE and SWOT analyses reveal a \
                compelling market landscape. While regulatory changes and competitive \
                pressure present challenges, the trends strongly favor our approach. \
                Digital adoption is accelerating rapidly, with 85% of our target \
                demographic preferring mobile-first solutions. The social trading trend \
                is gaining momentum, with 65% of investors valuing community features. \
                Our analysis shows that Pulse Trading's community-focused approach is \
                perfectly positioned to capitalize on these trends. These insights \
                directly inform our strategic objectives for 2026.",
            spoken_duration_secs: 70.0,
            reading_buffer_secs: 10.0,
        },
    },
    Slide {
        index: 4,
        title: "2026 Strategic Objectives",
        bullets: &[
            "5,000 new sign-ups by Q2 2026 (150% growth trajectory)",
            "25% monthly active user retention",
            "$250,000 revenue by year-end at 2.5x marketing ROI",
            "Top-3 community platform in retail trading",
        ],
        notes: "Each objective is specific, measurable, and tied to the value \
                proposition, with defined tactics, timelines, and success \
                metrics. Emphasize traction signals investors care about.",
        script: SlideScript {
            slide_index: 4,
            speech_text: "These four strategic objectives translate our market insights \
                into measurable, achievable targets. First, we aim to acquire 5,000 new \
                sign-ups by Q2 2026, representing a 150% growth trajectory. Second, \
                we'll achieve 25% monthly active user retention, demonstrating strong \
                product-market fit. Third, we'll generate $250,000 in revenue by \
                year-end, with a 2.5x marketing return on investment. Finally, we'll \
                establish Pulse Trading as a top-3 community platform in the retail \
                trading space. Each objective has defined tactics, timelines, and \
                success metrics. Now let's see how these objectives connect to our \
                value proposition framework.",
            spoken_duration_secs: 70.0,
            reading_buffer_secs: 12.0,
        },
    },
    Slide {
        index: 5,
        title: "Value Proposition Ladder",
        bullets: &[
            "Functional: real-time analytics and community features",
            "Emotional: confidence, belonging, continuous learning",
            "Community-engaged users show 40% higher retention",
            "Emotional connection drives loyalty and engagement",
        ],
        notes: "Walk the ladder from features to feelings: the technical layer \
                delivers immediate value, but the emotional benefits are what \
                keep users on the platform long-term.",
        script: SlideScript {
            slide_index: 5,
            speech_text: "Our value proposition ladder demonstrates how technical \
                features translate into meaningful emotional benefits for users. At the \
                functional level, real-time analytics and community features deliver \
                immediate value. But the real power lies in the emotional benefits: \
                confidence in trading decisions, belonging to a supportive community, \
                and the satisfaction of continuous learning. This emotional connection \
                drives long-term engagement and platform loyalty. Our research shows \
                that users who engage with community features have 40% higher retention \
                rates. This value proposition directly addresses the needs we \
                identified in our target customer research.",
            spoken_duration_secs: 55.0,
            reading_buffer_secs: 8.0,
        },
    },
    Slide {
        index: 6,
        title: "Target Customer & Survey Validation",
        bullets: &[
            "50-person Qualtrics survey validates the persona",
            "85% prefer mobile-first solutions",
            "80% want real-time analytics",
            "65% value community features",
            "70% would pay $9.99 monthly for premium",
        ],
        notes: "The digital-native investor: comfortable with technology, \
                active on social media, makes data-driven decisions. The \
                survey numbers validate both product-market fit and pricing.",
        script: SlideScript {
            slide_index: 6,
            speech_text: "Our 50-person Qualtrics survey validates this persona profile \
                with compelling data. 85% of respondents prefer mobile-first solutions, \
                confirming our platform strategy. 80% want real-time analytics, \
                validating our core feature set. Most importantly, 65% value community \
                features, proving our social learning approach. The survey also \
                revealed that our target demographic is willing to pay premium prices \
                for quality tools, with 70% indicating they would pay $9.99 monthly for \
                our premium features. This validation gives us confidence in our \
                product-market fit and pricing strategy.",
            spoken_duration_secs: 70.0,
            reading_buffer_secs: 10.0,
        },
    },
    Slide {
        index: 7,
        title: "Product Strategy",
        bullets: &[
            "Mobile-first design with real-time data integration",
            "Core: advanced charting, social trading, educational content",
            "Premium: AI insights, priority support, exclusive community",
            "Freemium model lowers barriers, premium captures value",
        ],
        notes: "The architecture answers the survey directly. The freemium \
                split is strategic: free tier removes friction, premium tier \
                creates multiple revenue streams.",
        script: SlideScript {
            slide_index: 7,
            speech_text: "Our product architecture directly responds to these user \
                preferences with a mobile-first design, real-time data integration, \
                and seamless community features. The freemium model strategically \
                lowers barriers to entry while premium features drive sustainable \
                revenue growth. Our core features include advanced charting tools, \
                social trading capabilities, and educational content. The premium tier \
                adds AI-powered insights, priority customer support, and exclusive \
                community access. This product strategy supports our pricing approach \
                and creates multiple revenue streams.",
            spoken_duration_secs: 55.0,
            reading_buffer_secs: 8.0,
        },
    },
    Slide {
        index: 8,
        title: "Pricing Strategy",
        bullets: &[
            "$9.99/month premium price point",
            "Validated by 70% willingness-to-pay",
            "Competitors price at $15-25 monthly",
            "30-day free trial reduces friction",
        ],
        notes: "Accessibility and value in balance: validated by survey data, \
                positioned well under the $15-25 alternatives, with the trial \
                demonstrating value before commitment.",
        script: SlideScript {
            slide_index: 8,
            speech_text: "Our $9.99 premium price point strikes the optimal balance \
                between accessibility and value. This pricing is accessible for our \
                target demographic while being validated by our survey data showing \
                70% willingness-to-pay. It positions us competitively against \
                alternatives priced at $15-25 monthly, giving us a significant price \
                advantage. Our pricing strategy includes a 30-day free trial to reduce \
                friction and demonstrate value. This approach maximizes conversion \
                while maintaining healthy unit economics. Now let's see how our \
                promotional strategy brings this value proposition to market.",
            spoken_duration_secs: 55.0,
            reading_buffer_secs: 8.0,
        },
    },
    Slide {
        index: 9,
        title: "Promotion Strategy",
        bullets: &[
            "Awareness: digital advertising and content marketing",
            "Consideration: influencer partnerships, community testimonials",
            "Conversion: free trials and onboarding support",
            "Retention: community engagement and feature education",
        ],
        notes: "One tactic per decision stage. Modern investors research \
                extensively before committing, so education and social proof \
                run through the whole journey.",
        script: SlideScript {
            slide_index: 9,
            speech_text: "Our integrated promotional strategy addresses each stage of \
                the customer decision journey with precision. For awareness, we \
                leverage digital advertising and content marketing to reach our target \
                audience. During consideration, we use influencer partnerships and \
                community testimonials to build credibility. For conversion, we offer \
                free trials and onboarding support. Post-purchase, we focus on \
                community engagement and feature education to drive retention. Each \
                touchpoint is designed to maximize conversion rates and build \
                long-term community engagement. This promotional approach complements \
                our distribution strategy perfectly.",
            spoken_duration_secs: 55.0,
            reading_buffer_secs: 8.0,
        },
    },
    Slide {
        index: 10,
        title: "Distribution Strategy",
        bullets: &[
            "Digital-first: app stores, social platforms, partnerships",
            "Focus on urban and suburban US markets",
            "Concentrated spend, higher conversion, lower CAC",
            "Consistent brand experience across touchpoints",
        ],
        notes: "Geographic focus is a cost decision: the target demographic \
                concentrates in urban/suburban markets, so the marketing spend \
                works harder there.",
        script: SlideScript {
            slide_index: 10,
            speech_text: "Our digital-first distribution strategy ensures broad reach \
                while maintaining cost efficiency. We focus on urban and suburban US \
                markets where our target demographic is concentrated, allowing us to \
                maximize marketing spend efficiency. Our distribution channels include \
                app stores, social media platforms, and strategic partnerships with \
                financial education providers. This geographic focus enables us to \
                achieve higher conversion rates and lower customer acquisition costs. \
                Our distribution approach supports our service design framework and \
                ensures consistent brand experience across all touchpoints.",
            spoken_duration_secs: 55.0,
            reading_buffer_secs: 8.0,
        },
    },
    Slide {
        index: 11,
        title: "Service Design",
        bullets: &[
            "Expert team support across multiple channels",
            "Intuitive onboarding reduces the learning curve",
            "Visible community success stories build confidence",
            "Moderated, supportive, educational environment",
        ],
        notes: "People, process, and physical evidence reinforce the brand \
                promise: accessible, community-driven trading education. \
                Service excellence feeds lifetime value.",
        script: SlideScript {
            slide_index: 11,
            speech_text: "Our service design framework ensures every customer \
                touchpoint reinforces our brand promise of accessible, \
                community-driven trading education. We provide expert team support \
                through multiple channels, intuitive onboarding processes that reduce \
                learning curves, and visible community success stories that inspire \
                confidence. Our customer success team is trained to help users \
                maximize platform value, while our community moderators ensure a \
                supportive, educational environment. This service excellence directly \
                supports our financial projections and customer lifetime value \
                targets.",
            spoken_duration_secs: 55.0,
            reading_buffer_secs: 8.0,
        },
    },
    Slide {
        index: 12,
        title: "Budget & ROI",
        bullets: &[
            "$100,000 budget, allocated by impact",
            "40% digital advertising, 25% content marketing",
            "20% influencer partnerships, 15% tools and operations",
            "2.5x marketing return on investment target",
        ],
        notes: "Disciplined allocation based on data: the 2.5x ROI target \
                demonstrates strong unit economics and a realistic path to \
                profitability.",
        script: SlideScript {
            slide_index: 12,
            speech_text: "Our disciplined budget allocation prioritizes high-impact \
                channels based on data-driven insights. 40% of our $100,000 budget \
                goes to digital advertising for maximum reach and targeting precision. \
                25% is allocated to content marketing for long-term SEO and thought \
                leadership. 20% supports influencer partnerships for credibility and \
                authentic reach. The remaining 15% covers tools, analytics, and \
                operational support. Our 2.5x marketing return on investment target \
                demonstrates strong financial discipline and sustainable growth \
                potential. This financial foundation enables our comprehensive KPI \
                framework for ongoing optimization.",
            spoken_duration_secs: 70.0,
            reading_buffer_secs: 10.0,
        },
    },
    Slide {
        index: 13,
        title: "KPI Framework",
        bullets: &[
            "Monthly tracking with predefined remediation plans",
            "CAC, monthly active users, revenue per user, engagement",
            "Targets, measurement methods, and action plans per metric",
            "Real-time dashboard for rapid course correction",
        ],
        notes: "The framework de-risks the marketing investment: monthly \
                reviews enable quick corrections, quarterly assessments enable \
                strategic pivots.",
        script: SlideScript {
            slide_index: 13,
            speech_text: "Our KPI framework provides monthly tracking with predefined \
                remediation plans for each metric. We monitor user acquisition costs, \
                monthly active users, revenue per user, and community engagement \
                rates. Each KPI has specific targets, measurement methods, and action \
                plans if performance falls below expectations. This systematic \
                approach de-risks our marketing investment and demonstrates \
                operational maturity to potential investors. Our dashboard provides \
                real-time visibility into performance, enabling rapid response to \
                market changes and optimization opportunities.",
            spoken_duration_secs: 70.0,
            reading_buffer_secs: 10.0,
        },
    },
    Slide {
        index: 14,
        title: "Research Validation",
        bullets: &[
            "85% mobile preference supports platform priorities",
            "70% willingness-to-pay validates pricing",
            "65% community preference confirms social learning",
            "Data-driven approach reduces go-to-market risk",
        ],
        notes: "Every major strategic decision traces back to primary \
                research. High percentages across all key metrics demonstrate \
                clear product-market fit.",
        script: SlideScript {
            slide_index: 14,
            speech_text: "Our primary research validates every major strategic \
                decision we've made. The 85% mobile preference directly supports our \
                platform development priorities. The 70% willingness-to-pay validates \
                our pricing strategy. The 65% community feature preference confirms \
                our social learning approach. This research foundation enabled our \
                entire team's collaborative success and gives us confidence in our \
                go-to-market strategy. The data-driven approach reduces risk and \
                increases our probability of success in the competitive retail \
                trading market.",
            spoken_duration_secs: 55.0,
            reading_buffer_secs: 8.0,
        },
    },
    Slide {
        index: 15,
        title: "Team & Collaboration",
        bullets: &[
            "Specialized expertise across every marketing domain",
            "Each member leads their area, aligned to one vision",
            "Research, pricing, product, and financial modeling integrated",
            "Holistic user experience over isolated features",
        ],
        notes: "Deep expertise per domain with integrated execution. The \
                collaborative structure is itself a differentiator against \
                feature-focused competitors.",
        script: SlideScript {
            slide_index: 15,
            speech_text: "Our collaborative approach ensures every element of this \
                strategy is both expert-driven and strategically integrated. Each team \
                member brought specialized expertise while maintaining alignment with \
                our overall vision. From research and pricing to product development \
                and financial modeling, every component works together to create a \
                cohesive, executable plan. This integrated approach is what sets Pulse \
                Trading apart from competitors who focus on individual features rather \
                than holistic user experience.",
            spoken_duration_secs: 55.0,
            reading_buffer_secs: 8.0,
        },
    },
    Slide {
        index: 16,
        title: "Implementation Timeline",
        bullets: &[
            "Survey completion and financial review done this week",
            "Next: partnerships, beta launch, marketing campaign",
            "Phased milestones demonstrate traction to investors",
            "Seeking $500K to execute and capture the opportunity",
        ],
        notes: "Close with readiness: strategy is comprehensive, the team is \
                committed, the market opportunity is validated. End on the \
                funding ask and thank the audience.",
        script: SlideScript {
            slide_index: 16,
            speech_text: "Our implementation timeline demonstrates project discipline \
                and readiness for immediate execution. With survey completion and \
                financial review completed this week, we're on track to deliver a \
                compelling, investor-ready presentation that showcases both strategic \
                thinking and operational excellence. Our next steps include finalizing \
                partnerships, launching our beta program, and beginning our marketing \
                campaign. We're confident that this comprehensive strategy will \
                position Pulse Trading for success in the competitive retail trading \
                market. Thank you for joining us on this journey through Pulse \
                Trading's marketing strategy. We're excited to bring this vision to \
                life.",
            spoken_duration_secs: 70.0,
            reading_buffer_secs: 10.0,
        },
    },
];
