//! The built-in template catalogue. Templates are pre-authored starter
//! decks; media-bearing slides start with empty references the editor fills
//! in later.

use common::model::slide::{MediaItem, MediaKind, MediaPosition, Slide};
use common::model::template::Template;

fn title(id: &str, title: &str, content: &str, subtitle: &str, bg: &str, fg: &str) -> Slide {
    Slide::Title {
        id: id.to_string(),
        title: Some(title.to_string()),
        content: Some(content.to_string()),
        subtitle: Some(subtitle.to_string()),
        background_color: Some(bg.to_string()),
        text_color: Some(fg.to_string()),
    }
}

fn content(id: &str, title: &str, body: &str, bg: &str, fg: &str) -> Slide {
    Slide::Content {
        id: id.to_string(),
        title: Some(title.to_string()),
        content: Some(body.to_string()),
        background_color: Some(bg.to_string()),
        text_color: Some(fg.to_string()),
    }
}

fn image(id: &str, title: &str, body: &str, bg: &str, fg: &str) -> Slide {
    Slide::Image {
        id: id.to_string(),
        title: Some(title.to_string()),
        content: Some(body.to_string()),
        image_url: Some(String::new()),
        background_color: Some(bg.to_string()),
        text_color: Some(fg.to_string()),
    }
}

fn video(id: &str, title: &str, body: &str, bg: &str, fg: &str) -> Slide {
    Slide::Video {
        id: id.to_string(),
        title: Some(title.to_string()),
        content: Some(body.to_string()),
        video_url: Some(String::new()),
        background_color: Some(bg.to_string()),
        text_color: Some(fg.to_string()),
    }
}

fn contact(
    id: &str,
    title: &str,
    email: &str,
    phone: &str,
    website: &str,
    bg: &str,
    fg: &str,
) -> Slide {
    Slide::Contact {
        id: id.to_string(),
        title: Some(title.to_string()),
        email: Some(email.to_string()),
        phone: Some(phone.to_string()),
        website: Some(website.to_string()),
        background_color: Some(bg.to_string()),
        text_color: Some(fg.to_string()),
    }
}

fn media_item(id: &str, kind: MediaKind, x: f64, y: f64, w: f64, h: f64, cap: &str) -> MediaItem {
    MediaItem {
        id: id.to_string(),
        kind,
        url: String::new(),
        position: MediaPosition {
            x,
            y,
            width: w,
            height: h,
        },
        caption: Some(cap.to_string()),
    }
}

fn image_item(id: &str, x: f64, y: f64, w: f64, h: f64, cap: &str) -> MediaItem {
    media_item(id, MediaKind::Image, x, y, w, h, cap)
}

fn video_item(id: &str, x: f64, y: f64, w: f64, h: f64, cap: &str) -> MediaItem {
    media_item(id, MediaKind::Video, x, y, w, h, cap)
}

fn multi_media(
    id: &str,
    title: &str,
    body: &str,
    items: Vec<MediaItem>,
    bg: &str,
    fg: &str,
) -> Slide {
    Slide::MultiMedia {
        id: id.to_string(),
        title: Some(title.to_string()),
        content: Some(body.to_string()),
        media_items: items,
        background_color: Some(bg.to_string()),
        text_color: Some(fg.to_string()),
    }
}

pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template {
            id: "business-pitch".to_string(),
            name: "Business Pitch".to_string(),
            description: "Professional business presentation template with rich media support"
                .to_string(),
            slides: vec![
                title(
                    "title",
                    "TechCorp Solutions",
                    "Revolutionizing Business Technology",
                    "Empowering the future of work",
                    "#1a365d",
                    "#ffffff",
                ),
                content(
                    "problem",
                    "The Problem We Solve",
                    "Businesses struggle with:\n• Inefficient workflow management\n• Poor team collaboration\n• Data security concerns\n• High operational costs\n• Limited scalability",
                    "#2d3748",
                    "#e2e8f0",
                ),
                image(
                    "solution",
                    "Our Innovative Solution",
                    "A comprehensive platform that streamlines operations, enhances security, and drives growth through intelligent automation.",
                    "#2a4365",
                    "#bee3f8",
                ),
                content(
                    "market",
                    "Market Opportunity",
                    "Global Business Software Market:\n• $500B+ market size\n• 15% annual growth rate\n• 2.5M+ potential customers\n• $50K average contract value",
                    "#22543d",
                    "#c6f6d5",
                ),
                content(
                    "business-model",
                    "Revenue Model",
                    "• SaaS Subscription: $99-999/month\n• Enterprise Licensing: $50K-500K\n• Professional Services: $150/hour\n• Training & Support: $25K/year",
                    "#744210",
                    "#faf089",
                ),
                image(
                    "team",
                    "Our Leadership Team",
                    "Experienced professionals with 50+ years combined experience in enterprise software and business transformation.",
                    "#553c9a",
                    "#e9d8fd",
                ),
                contact(
                    "contact",
                    "Let's Build the Future Together",
                    "hello@techcorp.com",
                    "+1-555-0123",
                    "www.techcorp.com",
                    "#742a2a",
                    "#fed7d7",
                ),
            ],
        },
        Template {
            id: "product-demo".to_string(),
            name: "Product Demo".to_string(),
            description: "Showcase your product features with interactive media".to_string(),
            slides: vec![
                title(
                    "title",
                    "SmartHome Hub",
                    "The Future of Home Automation",
                    "Control everything with one device",
                    "#2d3748",
                    "#ffffff",
                ),
                content(
                    "overview",
                    "Product Overview",
                    "SmartHome Hub is an AI-powered central control system that:\n\n• Connects to 200+ smart devices\n• Learns your preferences\n• Saves 30% on energy bills\n• Provides 24/7 security monitoring\n• Works with voice commands",
                    "#1a365d",
                    "#bee3f8",
                ),
                image(
                    "features",
                    "Key Features",
                    "• Voice Control Integration\n• Mobile App Control\n• Energy Management\n• Security Monitoring\n• Custom Automation\n• Multi-Room Audio",
                    "#22543d",
                    "#c6f6d5",
                ),
                content(
                    "benefits",
                    "Why Customers Love It",
                    "Customer Satisfaction: 4.8/5 stars\n\n• 95% energy savings\n• 60% faster setup than competitors\n• 99.9% uptime reliability\n• 24/7 customer support\n• Free software updates",
                    "#744210",
                    "#faf089",
                ),
                video(
                    "demo",
                    "See It In Action",
                    "Watch how SmartHome Hub transforms your daily routine with intelligent automation and seamless control.",
                    "#553c9a",
                    "#e9d8fd",
                ),
                content(
                    "pricing",
                    "Pricing Plans",
                    "Starter: $199\n• Basic home automation\n• 10 device support\n• Mobile app\n\nProfessional: $399\n• Advanced features\n• 50 device support\n• Voice control\n\nEnterprise: $799\n• Unlimited devices\n• Custom integrations\n• Priority support",
                    "#742a2a",
                    "#fed7d7",
                ),
                contact(
                    "contact",
                    "Get Started Today",
                    "sales@smarthome.com",
                    "+1-800-SMART-HOME",
                    "www.smarthomehub.com",
                    "#2d3748",
                    "#e2e8f0",
                ),
            ],
        },
        Template {
            id: "startup-pitch".to_string(),
            name: "Startup Pitch".to_string(),
            description: "Perfect for startup presentations with compelling storytelling"
                .to_string(),
            slides: vec![
                title(
                    "title",
                    "EcoCharge",
                    "Revolutionizing Electric Vehicle Charging",
                    "Fast, green, and everywhere",
                    "#22543d",
                    "#ffffff",
                ),
                content(
                    "vision",
                    "Our Vision",
                    "To accelerate the world's transition to sustainable energy by making EV charging as convenient as finding a gas station.\n\nWe envision a future where:\n• Every parking spot has a charger\n• Charging takes 5 minutes or less\n• 100% renewable energy powers all EVs\n• Charging is free for everyone",
                    "#1a365d",
                    "#bee3f8",
                ),
                image(
                    "problem",
                    "The Problem",
                    "Current EV charging infrastructure is:\n\n• Too slow (hours to charge)\n• Too sparse (charging deserts)\n• Too expensive ($0.30-0.50/kWh)\n• Too unreliable (broken stations)\n• Too complex (multiple apps/payments)",
                    "#742a2a",
                    "#fed7d7",
                ),
                video(
                    "solution",
                    "Our Breakthrough Solution",
                    "EcoCharge's revolutionary technology:\n\n• Ultra-fast charging (5 minutes)\n• Wireless charging pads\n• Solar-powered stations\n• AI-powered load balancing\n• Universal compatibility",
                    "#744210",
                    "#faf089",
                ),
                content(
                    "traction",
                    "Impressive Traction",
                    "Growth Metrics:\n\n• 500% YoY revenue growth\n• 10,000+ active users\n• 50+ charging stations deployed\n• $2M ARR\n• 95% customer retention\n• 4.9/5 customer rating\n\nPartnerships:\n• Tesla, Ford, GM\n• Walmart, Target, Costco\n• Major cities and universities",
                    "#553c9a",
                    "#e9d8fd",
                ),
                image(
                    "team",
                    "The Dream Team",
                    "Founders with 30+ years combined experience:\n\n• CEO: Former Tesla engineer\n• CTO: PhD in electrical engineering\n• COO: Ex-Uber operations leader\n• CMO: Former Apple marketing director",
                    "#2d3748",
                    "#e2e8f0",
                ),
                content(
                    "ask",
                    "Investment Opportunity",
                    "Seeking $5M Series A to:\n\n• Deploy 1,000 charging stations\n• Expand to 10 new cities\n• Hire 50 team members\n• Develop next-gen technology\n• Scale manufacturing\n\nExpected ROI: 10x within 3 years",
                    "#1a365d",
                    "#ffffff",
                ),
            ],
        },
        Template {
            id: "marketing-campaign".to_string(),
            name: "Marketing Campaign".to_string(),
            description: "Engaging marketing presentation with visual storytelling".to_string(),
            slides: vec![
                title(
                    "title",
                    "Brand Evolution 2024",
                    "Transforming Our Brand Story",
                    "Connecting hearts, inspiring minds",
                    "#553c9a",
                    "#ffffff",
                ),
                content(
                    "story",
                    "Our Brand Story",
                    "From humble beginnings to industry leader:\n\n• Founded in 2010 with a simple mission\n• Grew from 3 employees to 500+ team members\n• Served 1M+ customers worldwide\n• Won 25+ industry awards\n• Recognized as a top workplace",
                    "#1a365d",
                    "#bee3f8",
                ),
                image(
                    "campaign",
                    "The Campaign Concept",
                    "Our new campaign focuses on:\n\n• Authentic storytelling\n• Customer success stories\n• Behind-the-scenes content\n• Interactive experiences\n• Social media engagement",
                    "#22543d",
                    "#c6f6d5",
                ),
                video(
                    "video-story",
                    "Customer Success Stories",
                    "Real stories from real customers who transformed their businesses with our solutions.",
                    "#744210",
                    "#faf089",
                ),
                content(
                    "metrics",
                    "Campaign Performance",
                    "Expected Results:\n\n• 500% increase in brand awareness\n• 300% boost in social media engagement\n• 200% growth in website traffic\n• 150% increase in lead generation\n• 100% improvement in customer satisfaction",
                    "#742a2a",
                    "#fed7d7",
                ),
                content(
                    "timeline",
                    "Launch Timeline",
                    "Phase 1 (Q1): Brand refresh and website launch\nPhase 2 (Q2): Social media campaign kickoff\nPhase 3 (Q3): Customer story video series\nPhase 4 (Q4): Interactive brand experience\n\nTotal Budget: $2.5M\nExpected ROI: 400%",
                    "#2d3748",
                    "#e2e8f0",
                ),
                contact(
                    "contact",
                    "Join Our Journey",
                    "hello@brandevolution.com",
                    "+1-555-BRAND-2024",
                    "www.brandevolution.com",
                    "#553c9a",
                    "#e9d8fd",
                ),
            ],
        },
        Template {
            id: "educational-content".to_string(),
            name: "Educational Content".to_string(),
            description: "Interactive learning presentation with multimedia elements".to_string(),
            slides: vec![
                title(
                    "title",
                    "The Future of AI",
                    "Understanding Artificial Intelligence",
                    "A comprehensive guide for everyone",
                    "#2d3748",
                    "#ffffff",
                ),
                content(
                    "intro",
                    "What is Artificial Intelligence?",
                    "AI is the simulation of human intelligence in machines:\n\n• Machine Learning\n• Natural Language Processing\n• Computer Vision\n• Robotics\n• Expert Systems\n\nAI is already part of our daily lives!",
                    "#1a365d",
                    "#bee3f8",
                ),
                image(
                    "history",
                    "A Brief History of AI",
                    "Key milestones:\n\n1950s: Turing Test proposed\n1960s: First AI programs\n1980s: Expert systems boom\n1990s: Machine learning advances\n2000s: Big data revolution\n2010s: Deep learning breakthrough\n2020s: AI in everything",
                    "#22543d",
                    "#c6f6d5",
                ),
                video(
                    "demo",
                    "AI in Action",
                    "Watch how AI is transforming industries:\n\n• Healthcare: Medical diagnosis\n• Finance: Fraud detection\n• Transportation: Self-driving cars\n• Education: Personalized learning\n• Entertainment: Content creation",
                    "#744210",
                    "#faf089",
                ),
                content(
                    "applications",
                    "Real-World Applications",
                    "AI is everywhere:\n\n• Virtual assistants (Siri, Alexa)\n• Recommendation systems (Netflix, Amazon)\n• Image recognition (Facebook, Google Photos)\n• Language translation (Google Translate)\n• Autonomous vehicles (Tesla, Waymo)\n• Medical imaging (diagnosis assistance)",
                    "#553c9a",
                    "#e9d8fd",
                ),
                content(
                    "future",
                    "The Future of AI",
                    "What's coming next:\n\n• General AI (human-level intelligence)\n• Quantum computing integration\n• Brain-computer interfaces\n• AI-powered creativity tools\n• Autonomous everything\n• AI ethics and regulation\n\nOpportunities and challenges ahead!",
                    "#742a2a",
                    "#fed7d7",
                ),
                contact(
                    "resources",
                    "Learn More",
                    "ai-education@future.com",
                    "+1-555-AI-LEARN",
                    "www.ai-education.com",
                    "#2d3748",
                    "#e2e8f0",
                ),
            ],
        },
        Template {
            id: "actf-mipcom".to_string(),
            name: "ACTF MIPCOM".to_string(),
            description:
                "Professional presentation template inspired by modern design with custom styling"
                    .to_string(),
            slides: vec![
                title(
                    "title",
                    "ACTF MIPCOM",
                    "Professional Presentation",
                    "Modern design with custom styling",
                    "#fafafc",
                    "#2b2a35",
                ),
                content(
                    "overview",
                    "Project Overview",
                    "A comprehensive overview of our innovative approach to modern presentation design:\n\n• Custom typography and fonts\n• Professional color schemes\n• Responsive layout design\n• Interactive elements\n• Modern visual hierarchy",
                    "#fafafc",
                    "#545465",
                ),
                image(
                    "features",
                    "Key Features",
                    "Our platform delivers:\n\n• Advanced typography system\n• Custom font loading\n• Responsive design\n• Professional themes\n• Interactive components\n• Seamless integration",
                    "#fafafc",
                    "#545465",
                ),
                content(
                    "technology",
                    "Technology Stack",
                    "Built with modern technologies:\n\n• React.js for frontend\n• Node.js backend\n• Custom CSS frameworks\n• Web font optimization\n• Progressive Web App features\n• Cross-platform compatibility",
                    "#fafafc",
                    "#545465",
                ),
                video(
                    "benefits",
                    "Benefits & Advantages",
                    "Why choose our solution:\n\n• Professional appearance\n• Consistent branding\n• Easy customization\n• Fast performance\n• Mobile optimization\n• Offline capability",
                    "#fafafc",
                    "#545465",
                ),
                content(
                    "implementation",
                    "Implementation Process",
                    "Our streamlined implementation:\n\n• Initial consultation\n• Design customization\n• Development phase\n• Testing & optimization\n• Deployment\n• Ongoing support",
                    "#fafafc",
                    "#545465",
                ),
                contact(
                    "contact",
                    "Get Started Today",
                    "contact@actf-mipcom.com",
                    "+1-555-MIPCOM",
                    "www.actf-mipcom.com",
                    "#fafafc",
                    "#2b2a35",
                ),
            ],
        },
        Template {
            id: "multi-media-demo".to_string(),
            name: "Multi-Media Demo".to_string(),
            description: "Template showcasing multiple media items on a single slide".to_string(),
            slides: vec![
                title(
                    "title",
                    "Multi-Media Presentation",
                    "Showcasing Multiple Media Types",
                    "Images, videos, and text on one slide",
                    "#1a365d",
                    "#ffffff",
                ),
                multi_media(
                    "multi-media-slide",
                    "Product Showcase",
                    "Our flagship product combines cutting-edge technology with intuitive design to deliver an unparalleled user experience.",
                    vec![
                        image_item("media-1", 5.0, 15.0, 40.0, 35.0, "Product Interface"),
                        video_item("media-2", 50.0, 15.0, 40.0, 35.0, "Product Demo"),
                        image_item("media-3", 27.5, 55.0, 40.0, 35.0, "Technical Specs"),
                    ],
                    "#2d3748",
                    "#e2e8f0",
                ),
                content(
                    "content",
                    "Key Benefits",
                    "• Multiple media types on one slide\n• Flexible positioning and sizing\n• Rich visual storytelling\n• Enhanced engagement\n• Professional presentation",
                    "#2a4365",
                    "#bee3f8",
                ),
            ],
        },
        Template {
            id: "portfolio-showcase".to_string(),
            name: "Portfolio Showcase".to_string(),
            description: "Perfect for showcasing multiple projects or products with visual media"
                .to_string(),
            slides: vec![
                title(
                    "title",
                    "Portfolio Showcase",
                    "Our Creative Work",
                    "Showcasing our best projects and achievements",
                    "#2d3748",
                    "#ffffff",
                ),
                multi_media(
                    "portfolio-grid",
                    "Featured Projects",
                    "A selection of our most impactful work across various industries and technologies.",
                    vec![
                        image_item("project-1", 5.0, 15.0, 28.0, 30.0, "Project Alpha"),
                        image_item("project-2", 37.0, 15.0, 28.0, 30.0, "Project Beta"),
                        image_item("project-3", 69.0, 15.0, 28.0, 30.0, "Project Gamma"),
                        image_item("project-4", 5.0, 50.0, 28.0, 30.0, "Project Delta"),
                        image_item("project-5", 37.0, 50.0, 28.0, 30.0, "Project Epsilon"),
                        image_item("project-6", 69.0, 50.0, 28.0, 30.0, "Project Zeta"),
                    ],
                    "#1a365d",
                    "#bee3f8",
                ),
            ],
        },
        Template {
            id: "comparison-slide".to_string(),
            name: "Comparison Slide".to_string(),
            description: "Compare two or more items side by side with visual media".to_string(),
            slides: vec![
                title(
                    "title",
                    "Product Comparison",
                    "Before vs After",
                    "See the difference our solution makes",
                    "#22543d",
                    "#ffffff",
                ),
                multi_media(
                    "comparison",
                    "Before vs After",
                    "Visual comparison showing the transformation and improvements achieved.",
                    vec![
                        image_item("before", 5.0, 15.0, 42.0, 60.0, "Before"),
                        image_item("after", 53.0, 15.0, 42.0, 60.0, "After"),
                    ],
                    "#744210",
                    "#faf089",
                ),
            ],
        },
        Template {
            id: "feature-highlight".to_string(),
            name: "Feature Highlight".to_string(),
            description: "Highlight multiple features with supporting media".to_string(),
            slides: vec![
                title(
                    "title",
                    "Key Features",
                    "What Makes Us Special",
                    "Discover our unique capabilities",
                    "#553c9a",
                    "#ffffff",
                ),
                multi_media(
                    "features",
                    "Core Features",
                    "Our platform offers a comprehensive suite of features designed to meet your needs.",
                    vec![
                        image_item("feature-1", 10.0, 20.0, 35.0, 25.0, "Feature 1"),
                        image_item("feature-2", 55.0, 20.0, 35.0, 25.0, "Feature 2"),
                        image_item("feature-3", 10.0, 50.0, 35.0, 25.0, "Feature 3"),
                        image_item("feature-4", 55.0, 50.0, 35.0, 25.0, "Feature 4"),
                    ],
                    "#742a2a",
                    "#fed7d7",
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_lists_every_deck_in_order() {
        let ids: Vec<_> = builtin_templates().iter().map(|t| t.id.clone()).collect();
        assert_eq!(
            ids,
            [
                "business-pitch",
                "product-demo",
                "startup-pitch",
                "marketing-campaign",
                "educational-content",
                "actf-mipcom",
                "multi-media-demo",
                "portfolio-showcase",
                "comparison-slide",
                "feature-highlight",
            ]
        );
    }

    #[test]
    fn slide_ids_are_unique_within_each_template() {
        for template in builtin_templates() {
            let mut ids: Vec<_> = template.slides.iter().map(|s| s.id().to_string()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), template.slides.len(), "template {}", template.id);
        }
    }

    #[test]
    fn template_media_references_start_empty() {
        for template in builtin_templates() {
            for slide in &template.slides {
                assert!(!slide.has_media(), "template {} ships media", template.id);
            }
        }
    }
}
