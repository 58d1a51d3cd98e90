use super::{About, Blog, Contact, CoverLetter, Cv, Hero, Nav, Seo, Skills, Translations};

pub static DE: Translations = Translations {
    nav: Nav {
        home: "Startseite",
        about: "Über mich",
        skills: "Fähigkeiten",
        blog: "Blog",
        cover_letter: "Anschreiben",
        cv: "Lebenslauf",
        contact: "Kontakt",
    },
    hero: Hero {
        greeting: "Hallo, ich bin Mustafa Altas",
        cta_primary: "Kontaktieren",
        cta_secondary: "Zum Blog",
    },
    about: About {
        title: "Über mich",
        description: "Ich bin ein hochmotivierter Entwickler mit einer unermüdlichen \
                      Leidenschaft für das Lernen. Während ich über ein starkes Fundament in \
                      der Webentwicklung verfüge, liegt meine wahre Stärke in meiner Fähigkeit, \
                      mich sofort an neue Technologien und Herausforderungen anzupassen. Ich \
                      gehe jedes Projekt mit Begeisterung, hoher Energie und dem Wunsch an, \
                      über Grenzen hinauszuwachsen.",
        experience_title: "Lebenslanges Lernen",
    },
    skills: Skills {
        title: "Technisches Potenzial",
        subtitle: "Mein aktueller Stack und meine Fähigkeit, Neues zu meistern",
    },
    blog: Blog {
        title: "Aus meinem Blog",
        subtitle: "Notizen zu dem, was ich lerne und baue",
        read_more: "Weiterlesen",
        maintenance_message: "Der Blog wird überarbeitet. Neue Beiträge folgen in Kürze.",
        view_all: "Alle Beiträge",
        back_to_home: "Zurück zur Startseite",
        back_to_blog: "Zurück zum Blog",
        all_posts_title: "Alle Blogbeiträge",
        all_posts_subtitle: "Gedanken zu Entwicklung, Lernen und Technologie",
        prev_page: "Zurück",
        next_page: "Weiter",
        page: "Seite",
        of: "von",
    },
    cover_letter: CoverLetter {
        title: "Anschreiben",
        subtitle: "Warum ich die richtige Wahl für Ihr Team bin",
        content: &[
            "Sehr geehrte Damen und Herren,",
            "Softwareentwicklung ist für mich mehr als nur das Schreiben von Code; es ist eine \
             ständige Reise der Problemlösung und Wertschöpfung. Während meiner gesamten \
             Laufbahn habe ich mich nicht nur auf technische Exzellenz konzentriert, sondern \
             auch darauf, mich an die sich ständig verändernde Technologielandschaft \
             anzupassen. Mein größtes Kapital ist nicht nur das, was ich heute weiß, sondern \
             wie schnell ich das meistern kann, was morgen kommt.",
            "Ich blühe in dynamischen Umgebungen auf, in denen Neugier belohnt wird und \
             Herausforderungen als Chancen gesehen werden. Ob es darum geht, ein neues \
             Framework über Nacht zu lernen oder ein komplexes System zu optimieren – ich \
             bringe ein Maß an Energie und Engagement mit, das Projekte voranbringt.",
            "Ich freue mich darauf, meine Anpassungsfähigkeit, meine technischen Fähigkeiten \
             und meine unerschütterliche Motivation in Ihr Team einzubringen, um gemeinsam \
             wirkungsvolle Lösungen zu entwickeln.",
        ],
    },
    cv: Cv {
        title: "Lebenslauf",
        description: "Möchten Sie meinen Werdegang und mein Potenzial sehen? Laden Sie meinen \
                      Lebenslauf herunter, um meinen Hintergrund und meine Motivation zu \
                      entdecken.",
        download: "Lebenslauf Herunterladen",
    },
    contact: Contact {
        title: "Kontakt",
        name_placeholder: "Ihr Name",
        email_placeholder: "Ihre E-Mail",
        message_placeholder: "Wie kann ich helfen?",
        send: "Nachricht Senden",
    },
    seo: Seo {
        title: "Mustafa Altas | Motivierter Technologie-Enthusiast",
        description: "Portfolio von Mustafa Altas, einem hochmotivierten Entwickler mit \
                      Leidenschaft für kontinuierliches Lernen.",
    },
};
