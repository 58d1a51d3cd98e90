use super::{About, Blog, Contact, CoverLetter, Cv, Hero, Nav, Seo, Skills, Translations};

pub static TR: Translations = Translations {
    nav: Nav {
        home: "Anasayfa",
        about: "Hakkımda",
        skills: "Yetenekler",
        blog: "Blog",
        cover_letter: "Ön Yazı",
        cv: "Özgeçmiş",
        contact: "İletişim",
    },
    hero: Hero {
        greeting: "Merhaba, Ben Mustafa Altas",
        cta_primary: "İletişime Geç",
        cta_secondary: "Bloga Git",
    },
    about: About {
        title: "Hakkımda",
        description: "Ben, öğrenme tutkusu yüksek ve son derece motive bir geliştiriciyim. Web \
                      geliştirme konusunda güçlü bir temele sahip olmamın yanı sıra, asıl gücüm \
                      yeni teknolojilere ve zorluklara hızla uyum sağlayabilmemdir. Her projeye \
                      yüksek enerjiyle, öğrenme açlığıyla ve sınırları zorlama arzusuyla \
                      yaklaşıyorum.",
        experience_title: "Sürekli Öğrenen",
    },
    skills: Skills {
        title: "Teknik Potansiyel",
        subtitle: "Mevcut yetkinliklerim ve yeni araçları öğrenme hızım",
    },
    blog: Blog {
        title: "Blog Yazılarım",
        subtitle: "Öğrendiklerim ve geliştirdiklerim üzerine notlar",
        read_more: "Devamını Oku",
        maintenance_message: "Blog yenileniyor. Yeni yazılar çok yakında.",
        view_all: "Tüm Yazıları Gör",
        back_to_home: "Anasayfaya Dön",
        back_to_blog: "Bloga Dön",
        all_posts_title: "Tüm Blog Yazıları",
        all_posts_subtitle: "Yazılım, öğrenme ve teknoloji üzerine düşünceler",
        prev_page: "Önceki",
        next_page: "Sonraki",
        page: "Sayfa",
        of: "/",
    },
    cover_letter: CoverLetter {
        title: "Motivasyon Mektubu",
        subtitle: "Neden ekibiniz için doğru kişiyim",
        content: &[
            "Sayın Yetkili,",
            "Yazılım geliştirme benim için sadece kod yazmaktan ibaret değil; sorunları çözmek \
             ve değer yaratmak için sürekli bir yolculuktur. Kariyerim boyunca sadece teknik \
             mükemmelliğe odaklanmakla kalmadım, aynı zamanda teknolojinin sürekli değişen \
             doğasına uyum sağlamaya da büyük önem verdim. En büyük varlığım, bugün \
             bildiklerimden ziyade, yarın gelecek olanları ne kadar hızlı öğrenebildiğimdir.",
            "Merakın ödüllendirildiği ve zorlukların fırsat olarak görüldüğü dinamik ortamlarda \
             en iyi performansımı sergilerim. İster yeni bir framework'ü bir gecede öğrenmek \
             olsun, ister karmaşık bir sistemi optimize etmek; projelere her zaman ileriye \
             taşıyan bir enerji ve adanmışlık katarım.",
            "Uyumluluğumu, teknik becerilerimi ve sarsılmaz motivasyonumu ekibinize katarak \
             birlikte etkileyici çözümler üretmek için sabırsızlanıyorum.",
        ],
    },
    cv: Cv {
        title: "Özgeçmiş",
        description: "Yolculuğumu ve potansiyelimi görmek ister misiniz? Geçmişimi, eğitimimi \
                      ve takımlara kattığım enerjiyi incelemek için CV'mi indirin.",
        download: "CV İndir",
    },
    contact: Contact {
        title: "İletişime Geç",
        name_placeholder: "Adınız",
        email_placeholder: "E-postanız",
        message_placeholder: "Nasıl yardımcı olabilirim?",
        send: "Mesaj Gönder",
    },
    seo: Seo {
        title: "Mustafa Altas | Motive Teknoloji Tutkunu",
        description: "Sürekli öğrenmeye ve inovasyona tutkulu, motivasyonu yüksek geliştirici \
                      Mustafa Altas'ın portföyü.",
    },
};
