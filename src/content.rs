//! Static site copy. Everything here lives for the whole process and is never mutated.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Car,
    Spray,
    Tools,
    Star,
    Water,
    Brush,
    Wind,
    Checklist,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Car => "🚗",
            Icon::Spray => "🧴",
            Icon::Tools => "🛠️",
            Icon::Star => "⭐",
            Icon::Water => "💧",
            Icon::Brush => "🧽",
            Icon::Wind => "💨",
            Icon::Checklist => "📋",
        }
    }
}

pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "services", label: "שירותים", href: "#services-section" },
    NavItem { id: "about", label: "אודות", href: "#car-wash-process" },
    NavItem { id: "testimonials", label: "המלצות", href: "#testimonials-section" },
    NavItem { id: "faq", label: "שאלות נפוצות", href: "#faq-section" },
    NavItem { id: "contact", label: "צור קשר", href: "#contact-section" },
];

pub const BOOK_NOW: &str = "הזמן עכשיו";

pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub image: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: Icon::Car,
        title: "שטיפה בסיסית",
        description: "שטיפה חיצונית, ניקוי פנימי בסיסי וייבוש ידני. מושלם לניקיון שגרתי.",
        price: "₪49",
        image: "https://images.unsplash.com/photo-1520340356584-f9917d1eea6f?auto=format&fit=crop&w=800&q=80",
    },
    Service {
        icon: Icon::Spray,
        title: "שטיפה פרימיום",
        description: "שטיפה חיצונית מקיפה, ניקוי פנימי מעמיק, וקס הגנה וטיפול בצמיגים.",
        price: "₪89",
        image: "https://images.unsplash.com/photo-1605618313023-d8b0af2f1f09?auto=format&fit=crop&w=800&q=80",
    },
    Service {
        icon: Icon::Tools,
        title: "דיטיילינג דלוקס",
        description: "טיפול מקיף הכולל פוליש, וקס, ניקוי מנוע, ניקוי ריפודים והגנה על עור.",
        price: "₪199",
        image: "https://images.unsplash.com/photo-1600322305530-45714a0bc945?auto=format&fit=crop&w=800&q=80",
    },
    Service {
        icon: Icon::Star,
        title: "חבילת VIP",
        description: "הטיפול המושלם לרכב שלך. כולל דיטיילינג מלא, פוליש קרמי והגנה לשנה.",
        price: "₪349",
        image: "https://images.unsplash.com/photo-1601362840469-51e4d8d58785?auto=format&fit=crop&w=800&q=80",
    },
];

pub struct ProcessStep {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub image: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        id: 1,
        title: "שטיפה מקדימה",
        description: "הסרת לכלוך גס ואבק מהרכב באמצעות לחץ מים",
        icon: Icon::Water,
        image: "https://images.unsplash.com/photo-1520340356584-f9917d1eea6f?auto=format&fit=crop&w=800&q=80",
    },
    ProcessStep {
        id: 2,
        title: "מריחת סבון",
        description: "כיסוי הרכב בשכבת סבון מיוחד להסרת שומנים וכתמים",
        icon: Icon::Spray,
        image: "https://images.unsplash.com/photo-1605618313023-d8b0af2f1f09?auto=format&fit=crop&w=800&q=80",
    },
    ProcessStep {
        id: 3,
        title: "קרצוף",
        description: "ניקוי יסודי של כל משטחי הרכב באמצעות מברשות מיוחדות",
        icon: Icon::Brush,
        image: "https://images.unsplash.com/photo-1600880292203-757bb62b4baf?auto=format&fit=crop&w=800&q=80",
    },
    ProcessStep {
        id: 4,
        title: "שטיפה",
        description: "הסרת כל שאריות הסבון מהרכב באמצעות מים נקיים",
        icon: Icon::Water,
        image: "https://images.unsplash.com/photo-1601055903647-ddf1ee9701b7?auto=format&fit=crop&w=800&q=80",
    },
    ProcessStep {
        id: 5,
        title: "ייבוש",
        description: "ייבוש הרכב באמצעות מפוחים ומגבות מיקרופייבר איכותיות",
        icon: Icon::Wind,
        image: "https://images.unsplash.com/photo-1607860108855-64acf2078ed9?auto=format&fit=crop&w=800&q=80",
    },
    ProcessStep {
        id: 6,
        title: "בדיקה סופית",
        description: "בחינה מדוקדקת של הרכב לוודא שהוא נקי ומבריק",
        icon: Icon::Checklist,
        image: "https://images.unsplash.com/photo-1635770311293-b9f308fb0649?auto=format&fit=crop&w=800&q=80",
    },
];

pub struct GalleryItem {
    pub id: &'static str,
    pub before_image: &'static str,
    pub after_image: &'static str,
    pub caption: &'static str,
}

pub const GALLERY_ITEMS: &[GalleryItem] = &[
    GalleryItem {
        id: "1",
        before_image: "https://images.unsplash.com/photo-1605618313023-d8f0e2e0129b?auto=format&fit=crop&w=800&q=80",
        after_image: "https://images.unsplash.com/photo-1552519507-da3b142c6e3d?auto=format&fit=crop&w=800&q=80",
        caption: "רכב ספורט - לפני ואחרי טיפול מקצועי",
    },
    GalleryItem {
        id: "2",
        before_image: "https://images.unsplash.com/photo-1563720223809-b9c9c4f47d76?auto=format&fit=crop&w=800&q=80",
        after_image: "https://images.unsplash.com/photo-1550355291-bbee04a92027?auto=format&fit=crop&w=800&q=80",
        caption: "רכב משפחתי - ניקוי יסודי",
    },
    GalleryItem {
        id: "3",
        before_image: "https://images.unsplash.com/photo-1583836631333-f7edccc231d3?auto=format&fit=crop&w=800&q=80",
        after_image: "https://images.unsplash.com/photo-1549399542-7e3f8b79c341?auto=format&fit=crop&w=800&q=80",
        caption: "רכב יוקרה - טיפול פרימיום",
    },
    GalleryItem {
        id: "4",
        before_image: "https://images.unsplash.com/photo-1507136566006-cfc505b114fc?auto=format&fit=crop&w=800&q=80",
        after_image: "https://images.unsplash.com/photo-1542362567-b07e54358753?auto=format&fit=crop&w=800&q=80",
        caption: "רכב שטח - ניקוי מקצועי",
    },
];

pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    /// 0..=5 stars
    pub rating: u8,
    pub quote: &'static str,
    pub image: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "דוד כהן",
        rating: 5,
        quote: "שירות מעולה! המכונית שלי נראית כמו חדשה אחרי הטיפול. אני ממליץ בחום על שטיפת הרכב הזו לכל מי שמחפש איכות ומקצועיות.",
        image: "https://images.unsplash.com/photo-1568602471122-7832951cc4c5?auto=format&fit=crop&w=300&q=80",
    },
    Testimonial {
        id: 2,
        name: "מיכל לוי",
        rating: 4,
        quote: "צוות אדיב ומקצועי. הרכב שלי קיבל טיפול מסור ויסודי. אחזור בהחלט בפעם הבאה!",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&w=300&q=80",
    },
    Testimonial {
        id: 3,
        name: "יוסי אברהם",
        rating: 5,
        quote: "מחירים הוגנים ותוצאות מצוינות. הרכב שלי מבריק כמו ביום שקניתי אותו. שירות מהיר ויעיל.",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&w=300&q=80",
    },
    Testimonial {
        id: 4,
        name: "רונית שמעון",
        rating: 5,
        quote: "אני לקוחה קבועה כבר שנתיים. תמיד יוצאת מרוצה מהשירות והתוצאות. הצוות מקצועי ואכפתי.",
        image: "https://images.unsplash.com/photo-1580489944761-15a19d654956?auto=format&fit=crop&w=300&q=80",
    },
];

pub struct FaqItem {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        id: 1,
        question: "כמה זמן לוקח שטיפת רכב מלאה?",
        answer: "שטיפת רכב מלאה אורכת בין 30 ל-45 דקות, תלוי בגודל הרכב ובמצבו. שטיפה בסיסית יכולה להסתיים תוך 15-20 דקות בלבד.",
    },
    FaqItem {
        id: 2,
        question: "האם אני צריך לקבוע תור מראש?",
        answer: "לא חובה לקבוע תור מראש, אך מומלץ בימים עמוסים כמו שישי ושבת. ניתן לקבוע תור דרך האתר או בטלפון 03-1234567.",
    },
    FaqItem {
        id: 3,
        question: "אילו אמצעי תשלום מתקבלים?",
        answer: "אנו מקבלים מזומן, כרטיסי אשראי, אפליקציות תשלום כמו ביט ופייבוקס, וכן תשלום באמצעות אפליקציית העסק שלנו.",
    },
    FaqItem {
        id: 4,
        question: "האם יש לכם חבילות מנויים?",
        answer: "כן, אנו מציעים מספר חבילות מנויים חודשיים ושנתיים עם הנחות משמעותיות. חבילת הזהב שלנו כוללת שטיפה מלאה פעם בשבוע במחיר מיוחד.",
    },
    FaqItem {
        id: 5,
        question: "האם אתם משתמשים בחומרים ידידותיים לסביבה?",
        answer: "בהחלט! כל חומרי הניקוי שלנו הם ידידותיים לסביבה ומתכלים. אנו גם ממחזרים את המים בתהליך השטיפה כדי לחסוך במשאבים.",
    },
    FaqItem {
        id: 6,
        question: "האם אתם מציעים שירות ניקוי פנים לרכב?",
        answer: "כן, אנו מציעים מגוון שירותי ניקוי פנים, החל מניקוי בסיסי ועד לטיפול מקיף הכולל ניקוי ריפודים, שטיחים, לוח מחוונים וטיפול בעור.",
    },
];

pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const QUICK_LINKS: &[FooterLink] = &[
    FooterLink { label: "דף הבית", href: "#hero-section" },
    FooterLink { label: "שירותים", href: "#services-section" },
    FooterLink { label: "מחירון", href: "#services-section" },
    FooterLink { label: "אודות", href: "#car-wash-process" },
    FooterLink { label: "צור קשר", href: "#contact-section" },
];

pub const SERVICE_LINKS: &[FooterLink] = &[
    FooterLink { label: "שטיפה חיצונית", href: "#services-section" },
    FooterLink { label: "ניקוי פנימי", href: "#services-section" },
    FooterLink { label: "פוליש וציפוי", href: "#services-section" },
    FooterLink { label: "חבילות פרימיום", href: "#services-section" },
];

/// (days, hours)
pub const OPENING_HOURS: &[(&str, &str)] = &[
    ("ראשון - חמישי", "08:00 - 19:00"),
    ("שישי", "08:00 - 14:00"),
    ("שבת", "סגור"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let faq: HashSet<_> = FAQ_ITEMS.iter().map(|f| f.id).collect();
        assert_eq!(faq.len(), FAQ_ITEMS.len());
        let gallery: HashSet<_> = GALLERY_ITEMS.iter().map(|g| g.id).collect();
        assert_eq!(gallery.len(), GALLERY_ITEMS.len());
        let testimonials: HashSet<_> = TESTIMONIALS.iter().map(|t| t.id).collect();
        assert_eq!(testimonials.len(), TESTIMONIALS.len());
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        for (i, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.id as usize, i + 1);
        }
    }

    #[test]
    fn ratings_fit_five_stars() {
        assert!(TESTIMONIALS.iter().all(|t| t.rating <= 5));
    }

    #[test]
    fn nav_links_are_in_page_anchors() {
        assert!(NAV_ITEMS.iter().all(|item| item.href.starts_with('#')));
    }
}
