//! Static string tables for the two site languages.
//!
//! The tables are keyed by dotted section paths ("nav.home",
//! "services.payroll.title", ...). The English and Arabic key sets are not
//! identical; [`missing_keys`] reports the difference and lookup callers fall
//! back to the key itself.

use super::Language;

/// Keys rendered in the navigation bar, in display order.
pub const NAV_KEYS: &[&str] = &[
    "nav.home",
    "nav.about",
    "nav.services",
    "nav.mission",
    "nav.clients",
    "nav.careers",
    "nav.contact",
    "nav.privacy",
];

pub fn table(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::En => EN,
        Language::Ar => AR,
    }
}

pub fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    table(lang)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Keys present in one language's table but not the other, as
/// `(key, language it is missing from)` pairs. The site copy has never been
/// fully symmetric, so this is diagnostic output rather than an error.
pub fn missing_keys() -> Vec<(&'static str, Language)> {
    let mut missing = Vec::new();
    for (key, _) in EN {
        if lookup(Language::Ar, key).is_none() {
            missing.push((*key, Language::Ar));
        }
    }
    for (key, _) in AR {
        if lookup(Language::En, key).is_none() {
            missing.push((*key, Language::En));
        }
    }
    missing
}

const EN: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.about", "About Us"),
    ("nav.services", "Services"),
    ("nav.mission", "Mission & Vision"),
    ("nav.clients", "Clients"),
    ("nav.careers", "Careers"),
    ("nav.contact", "Contact Us"),
    ("nav.privacy", "Privacy Policy"),
    // Home page
    ("home.hero.title", "Modern HR Solutions for Modern Business"),
    (
        "home.hero.subtitle",
        "Streamline your HR processes with LoginHR's comprehensive suite of tools designed for modern businesses",
    ),
    ("home.hero.cta", "Discover Our Solutions"),
    ("home.hero.secondary", "Contact Us"),
    ("home.stats.title", "LoginHR Edge"),
    (
        "home.stats.subtitle",
        "Trusted HR technologies designed to enhance performance and drive results.",
    ),
    ("home.stats.clients", "Trusted Clients"),
    ("home.stats.employees", "Employees Managed"),
    ("home.stats.countries", "Sectors"),
    ("home.stats.years", "Years of Experience"),
    ("home.solutions.title", "HR Solutions That Work"),
    (
        "home.solutions.subtitle",
        "Our integrated platform handles all your HR needs, from recruitment to retirement",
    ),
    ("home.testimonials.title", "What Our Clients Say"),
    // About page
    ("about.title", "About LoginHR"),
    (
        "about.subtitle",
        "We are a team of HR professionals and technology experts dedicated to simplifying human resource management",
    ),
    ("about.story.title", "Our Story"),
    (
        "about.story.content",
        "Founded in 2012, LoginHR set out to transform the way businesses handle their human resources. We identified the pain points that HR departments face daily and built solutions that address these challenges head-on.",
    ),
    ("about.team.title", "Our Leadership Team"),
    // Services page
    ("services.title", "Our Services"),
    (
        "services.subtitle",
        "Comprehensive HR solutions tailored to your business needs",
    ),
    ("services.recruitment.title", "Recruitment & Onboarding"),
    (
        "services.recruitment.description",
        "Streamline your hiring process from job posting to employee onboarding",
    ),
    ("services.personnel.title", "Personnel Management"),
    (
        "services.personnel.description",
        "Streamline employee data, simplify HR tasks, and enhance workforce oversight.",
    ),
    ("services.attendance.title", "Attendance Management"),
    (
        "services.attendance.description",
        "Monitor work hours and attendance with ease.",
    ),
    ("services.fleet.title", "Fleet and Accommodations"),
    (
        "services.fleet.description",
        "Manage employee transportation and housing efficiently, all in one place.",
    ),
    ("services.payroll.title", "Payroll Management"),
    (
        "services.payroll.description",
        "Accurate and timely payroll processing that ensures compliance with local regulations",
    ),
    ("services.performance.title", "Performance Management"),
    (
        "services.performance.description",
        "Set goals, track progress, and evaluate employee performance effectively",
    ),
    ("services.learning.title", "Learning & Development"),
    (
        "services.learning.description",
        "Enhance employee skills with customized training programs",
    ),
    ("services.compliance.title", "Compliance & Documentation"),
    (
        "services.compliance.description",
        "Stay compliant with labor laws and maintain proper documentation",
    ),
    ("services.benefits.title", "Benefits Administration"),
    (
        "services.benefits.description",
        "Manage employee benefits efficiently and transparently",
    ),
    // Mission & vision
    ("mission.title", "Our Mission & Vision"),
    (
        "mission.subtitle",
        "Driving excellence in human resource management",
    ),
    ("mission.mission.title", "Our Mission"),
    (
        "mission.mission.content",
        "To empower organizations with innovative HR solutions that enhance efficiency, promote employee satisfaction, and drive business growth.",
    ),
    ("mission.vision.title", "Our Vision"),
    (
        "mission.vision.content",
        "To be the leading HR solutions provider globally, recognized for excellence in service, innovation, and customer satisfaction.",
    ),
    ("mission.values.title", "Our Values"),
    ("mission.values.innovation", "Innovation"),
    ("mission.values.integrity", "Integrity"),
    ("mission.values.excellence", "Excellence"),
    ("mission.values.collaboration", "Collaboration"),
    // Clients page
    ("clients.title", "Our Clients"),
    (
        "clients.subtitle",
        "Trusted by leading organizations across industries",
    ),
    ("clients.categories.medical", "Medical"),
    ("clients.categories.factories", "Factories"),
    ("clients.categories.education", "Education"),
    ("clients.categories.retail", "Retail"),
    ("clients.categories.technology", "Technology"),
    ("clients.viewall", "View All"),
    // Contact page
    ("contact.title", "Contact Us"),
    (
        "contact.subtitle",
        "Get in touch with our team to learn how we can help your business",
    ),
    ("contact.form.name", "Full Name"),
    ("contact.form.email", "Email Address"),
    ("contact.form.phone", "Phone Number"),
    ("contact.form.message", "Message"),
    ("contact.form.submit", "Send Message"),
    ("contact.info.address", "Address"),
    ("contact.info.email", "Email"),
    ("contact.info.phone", "Phone"),
    // Privacy policy
    ("privacy.title", "Privacy Policy"),
    (
        "privacy.subtitle",
        "How we collect, use, and protect your information",
    ),
    // Footer
    ("footer.rights", "All Rights Reserved"),
    ("footer.terms", "Terms of Service"),
    ("footer.privacy", "Privacy Policy"),
];

const AR: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "الرئيسية"),
    ("nav.about", "من نحن"),
    ("nav.services", "خدماتنا"),
    ("nav.mission", "رؤيتنا ورسالتنا"),
    ("nav.clients", "عملاؤنا"),
    ("nav.careers", "الوظائف"),
    ("nav.contact", "اتصل بنا"),
    ("nav.privacy", "سياسة الخصوصية"),
    // Home page
    ("home.hero.title", "حلول موارد بشرية حديثة للأعمال الحديثة"),
    (
        "home.hero.subtitle",
        "قم بتبسيط عمليات الموارد البشرية الخاصة بك من خلال مجموعة شاملة من أدوات LoginHR المصممة للشركات الحديثة",
    ),
    ("home.hero.cta", "اكتشف حلولنا"),
    ("home.hero.secondary", "اتصل بنا"),
    ("home.stats.clients", "نجاحات مشتركة"),
    ("home.stats.employees", "موظفين تمت إدارتهم"),
    ("home.stats.countries", "قطاع"),
    ("home.stats.years", "سنوات من الخبرة"),
    ("home.solutions.title", "حلول موارد بشرية فعالة"),
    (
        "home.solutions.subtitle",
        "تتعامل منصتنا المتكاملة مع جميع احتياجات الموارد البشرية الخاصة بك، من التوظيف إلى التقاعد",
    ),
    ("home.testimonials.title", "ماذا يقول عملاؤنا"),
    // About page
    ("about.title", "عن LoginHR"),
    (
        "about.subtitle",
        "نحن فريق من محترفي الموارد البشرية وخبراء التكنولوجيا متخصصون في تبسيط إدارة الموارد البشرية",
    ),
    ("about.story.title", "قصتنا"),
    (
        "about.story.content",
        "تأسست LoginHR في عام 2012، بهدف تحويل طريقة تعامل الشركات مع مواردها البشرية. حددنا نقاط الألم التي تواجهها أقسام الموارد البشرية يوميًا وبنينا حلولًا تعالج هذه التحديات مباشرة.",
    ),
    ("about.team.title", "فريق القيادة لدينا"),
    // Services page
    ("services.title", "خدماتنا"),
    (
        "services.subtitle",
        "حلول شاملة للموارد البشرية مصممة خصيصًا لاحتياجات عملك",
    ),
    ("services.recruitment.title", "التوظيف والتعيين"),
    (
        "services.recruitment.description",
        "تبسيط عملية التوظيف من نشر الوظائف إلى تعيين الموظفين",
    ),
    ("services.attendance.title", "تتبع الحضور والإنصراف"),
    ("services.payroll.title", "إدارة الرواتب"),
    (
        "services.payroll.description",
        "معالجة دقيقة وفي الوقت المناسب للرواتب تضمن الامتثال للوائح المحلية",
    ),
    ("services.performance.title", "إدارة الأداء"),
    (
        "services.performance.description",
        "تحديد الأهداف وتتبع التقدم وتقييم أداء الموظفين بفعالية",
    ),
    ("services.learning.title", "التعلم والتطوير"),
    (
        "services.learning.description",
        "تعزيز مهارات الموظفين من خلال برامج تدريبية مخصصة",
    ),
    ("services.compliance.title", "الامتثال والتوثيق"),
    (
        "services.compliance.description",
        "البقاء ممتثلاً لقوانين العمل والحفاظ على الوثائق المناسبة",
    ),
    ("services.benefits.title", "إدارة المزايا"),
    (
        "services.benefits.description",
        "إدارة مزايا الموظفين بكفاءة وشفافية",
    ),
    // Mission & vision
    ("mission.title", "رؤيتنا ورسالتنا"),
    ("mission.subtitle", "دفع التميز في إدارة الموارد البشرية"),
    ("mission.mission.title", "رسالتنا"),
    (
        "mission.mission.content",
        "تمكين المؤسسات من خلال حلول موارد بشرية مبتكرة تعزز الكفاءة وتعزز رضا الموظفين وتدفع نمو الأعمال.",
    ),
    ("mission.vision.title", "رؤيتنا"),
    (
        "mission.vision.content",
        "أن نكون المزود الرائد لحلول الموارد البشرية عالمياً، معروفين بالتميز في الخدمة والابتكار ورضا العملاء.",
    ),
    ("mission.values.title", "قيمنا"),
    ("mission.values.innovation", "الابتكار"),
    ("mission.values.integrity", "النزاهة"),
    ("mission.values.excellence", "التميز"),
    ("mission.values.collaboration", "التعاون"),
    // Clients page
    ("clients.title", "عملاؤنا"),
    (
        "clients.subtitle",
        "موثوق به من قبل المؤسسات الرائدة عبر الصناعات",
    ),
    ("clients.categories.medical", "الطبي"),
    ("clients.categories.factories", "المصانع"),
    ("clients.categories.education", "التعليم"),
    ("clients.categories.retail", "التجزئة"),
    ("clients.categories.technology", "التكنولوجيا"),
    ("clients.viewall", "عرض الكل"),
    // Contact page
    ("contact.title", "اتصل بنا"),
    (
        "contact.subtitle",
        "تواصل مع فريقنا لمعرفة كيف يمكننا مساعدة عملك",
    ),
    ("contact.form.name", "الاسم الكامل"),
    ("contact.form.email", "البريد الإلكتروني"),
    ("contact.form.phone", "رقم الهاتف"),
    ("contact.form.message", "الرسالة"),
    ("contact.form.submit", "إرسال الرسالة"),
    ("contact.info.address", "العنوان"),
    ("contact.info.email", "البريد الإلكتروني"),
    ("contact.info.phone", "الهاتف"),
    // Privacy policy
    ("privacy.title", "سياسة الخصوصية"),
    ("privacy.subtitle", "كيف نجمع واستخدام وحماية معلوماتك"),
    // Footer
    ("footer.rights", "جميع الحقوق محفوظة"),
    ("footer.terms", "شروط الخدمة"),
    ("footer.privacy", "سياسة الخصوصية"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defined_keys_are_non_empty() {
        for lang in [Language::En, Language::Ar] {
            for (key, value) in table(lang) {
                assert!(
                    !value.is_empty(),
                    "empty translation for {key} in {lang}"
                );
            }
        }
    }

    #[test]
    fn test_no_duplicate_keys() {
        for lang in [Language::En, Language::Ar] {
            let entries = table(lang);
            for (i, (key, _)) in entries.iter().enumerate() {
                assert!(
                    !entries[i + 1..].iter().any(|(k, _)| k == key),
                    "duplicate key {key} in {lang}"
                );
            }
        }
    }

    #[test]
    fn test_nav_keys_exist_in_both_languages() {
        for key in NAV_KEYS {
            assert!(lookup(Language::En, key).is_some(), "missing en {key}");
            assert!(lookup(Language::Ar, key).is_some(), "missing ar {key}");
        }
    }

    #[test]
    fn test_known_asymmetry_is_reported() {
        let missing = missing_keys();
        // The Arabic table has never carried the stats heading or the
        // personnel/fleet service blurbs.
        assert!(missing.contains(&("home.stats.title", Language::Ar)));
        assert!(missing.contains(&("services.personnel.title", Language::Ar)));
        assert!(missing.contains(&("services.fleet.title", Language::Ar)));
        assert!(missing.iter().all(|(_, lang)| *lang == Language::Ar));
    }
}
