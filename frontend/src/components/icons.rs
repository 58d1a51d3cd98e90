use yew::prelude::*;

/// Lucide icon set, inlined as SVG path data from https://lucide.dev
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    // Navigation
    ArrowLeft,
    ArrowUpRight,
    ChevronLeft,
    ChevronRight,
    Menu,
    X,

    // Content
    Calendar,
    Clock,
    Download,
    FileText,
    Quote,

    // Site chrome
    Globe,
    Moon,
    Sun,

    // Social
    Linkedin,
    Mail,
    Send,
    Share2,
    Twitter,

    // Console
    LayoutDashboard,
    Loader2,
    Lock,
    LogOut,
    Plus,
    RefreshCw,
    Sparkles,
    Trash2,
}

impl IconName {
    pub fn path(&self) -> &'static str {
        match self {
            IconName::ArrowLeft => "M12 19l-7-7 7-7M5 12h14",
            IconName::ArrowUpRight => "M7 7h10v10M7 17 17 7",
            IconName::ChevronLeft => "m15 18-6-6 6-6",
            IconName::ChevronRight => "m9 18 6-6-6-6",
            IconName::Menu => "M4 12h16M4 6h16M4 18h16",
            IconName::X => "M18 6 6 18M6 6l12 12",

            IconName::Calendar => {
                "M8 2v4M16 2v4M3 10h18M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 \
                 1-2-2V6a2 2 0 0 1 2-2z"
            },
            IconName::Clock => "M12 6v6l4 2M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
            IconName::Download => "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M7 10l5 5 5-5M12 15V3",
            IconName::FileText => {
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8zM14 2v6h6M16 13H8M16 \
                 17H8M10 9H8"
            },
            IconName::Quote => {
                "M10 11H6a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2h2a2 2 0 0 1 2 2v8a4 4 0 0 1-4 4M20 \
                 11h-4a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2h2a2 2 0 0 1 2 2v8a4 4 0 0 1-4 4"
            },

            IconName::Globe => {
                "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0zM2 12h20M12 2a14.5 14.5 0 0 0 0 20 \
                 14.5 14.5 0 0 0 0-20"
            },
            IconName::Moon => "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z",
            IconName::Sun => {
                "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 \
                 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41M16 12a4 4 0 1 1-8 0 4 4 0 0 1 8 0z"
            },

            IconName::Linkedin => {
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 \
                 6-6zM2 9h4v12H2zM6 4a2 2 0 1 1-4 0 2 2 0 0 1 4 0z"
            },
            IconName::Mail => {
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 \
                 6l-10 7L2 6"
            },
            IconName::Send => "m22 2-7 20-4-9-9-4zM22 2 11 13",
            IconName::Share2 => {
                "M21 5a3 3 0 1 1-6 0 3 3 0 0 1 6 0zM9 12a3 3 0 1 1-6 0 3 3 0 0 1 6 0zM21 19a3 3 \
                 0 1 1-6 0 3 3 0 0 1 6 0zM8.59 13.51l6.83 3.98M15.41 6.51l-6.82 3.98"
            },
            IconName::Twitter => {
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 \
                 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"
            },

            IconName::LayoutDashboard => "M3 3h7v9H3zM14 3h7v5h-7zM14 12h7v9h-7zM3 16h7v5H3z",
            IconName::Loader2 => "M21 12a9 9 0 1 1-6.219-8.56",
            IconName::Lock => {
                "M7 11V7a5 5 0 0 1 10 0v4M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 \
                 1-2-2v-7a2 2 0 0 1 2-2z"
            },
            IconName::LogOut => "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4M16 17l5-5-5-5M21 12H9",
            IconName::Plus => "M5 12h14M12 5v14",
            IconName::RefreshCw => {
                "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8M21 3v5h-5M21 12a9 9 0 0 \
                 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16M3 21v-5h5"
            },
            IconName::Sparkles => {
                "m12 3-1.9 5.8a2 2 0 0 1-1.287 1.288L3 12l5.8 1.9a2 2 0 0 1 1.288 1.287L12 \
                 21l1.9-5.8a2 2 0 0 1 1.287-1.288L21 12l-5.8-1.9a2 2 0 0 \
                 1-1.288-1.287zM5 3v4M19 17v4M3 5h4M17 19h4"
            },
            IconName::Trash2 => {
                "M3 6h18M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 \
                 1 2 2v2M10 11v6M14 11v6"
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        class,
    } = props;

    let stroke_width = if *size <= 16 { 2.5 } else { 2.0 };

    html! {
        <svg
            class={classes!("inline-block", "shrink-0", class.clone())}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d={name.path()} />
        </svg>
    }
}
