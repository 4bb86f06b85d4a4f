use crate::domain::model::BlogPost;

/// Authored record shipped with the binary, served whenever live data is unavailable.
#[derive(Debug, Clone, Copy)]
pub struct SeedPost {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub thumbnail: &'static str,
    pub published_date: &'static str,
    pub published_date_iso: &'static str,
    pub slug: &'static str,
}

impl SeedPost {
    pub fn to_blog_post(&self) -> BlogPost {
        BlogPost {
            id: self.id.to_string(),
            title: self.title.to_string(),
            content: self.content.to_string(),
            thumbnail: self.thumbnail.to_string(),
            published_date: self.published_date.to_string(),
            published_date_iso: self.published_date_iso.to_string(),
            slug: self.slug.to_string(),
        }
    }
}

// Newest first.
pub static SEED_POSTS: &[SeedPost] = &[
    SeedPost {
        id: "seed-1",
        title: "Lesser-Known Facts About Indian Laws",
        content: "1) You can be arrested without committing a crime. Indian law allows preventive detention, where a person can be detained to prevent a possible future offence, even without committing a crime yet.\n\n\
                  2) A witness can be punished for lying, even if the accused is guilty. Giving false testimony is a crime. Perjury can lead to punishment, regardless of whether the final judgment is correct.\n\n\
                  3) Courts can order DNA tests—even without consent. In certain cases, courts can direct DNA testing if it is necessary to determine truth and serve justice.\n\n\
                  4) Silence in some cases can be treated as evidence. While you have the right to silence, courts may draw limited adverse inferences if silence contradicts proven facts.\n\n\
                  5) A wife can file cases at her parental home. In matrimonial offences, complaints can legally be filed where the wife resides, not only where the incident occurred.\n\n\
                  6) Judges can summon anyone—even without police request. Courts have the power to summon any person as an accused if evidence appears during trial, even if police did not charge them.\n\n\
                  7) Legal notices are not always mandatory. Many civil disputes do not legally require a legal notice; it is often a strategic, not compulsory, step.\n\n\
                  8) An accused can defend themselves. Indian law allows an accused person to argue their own case without a lawyer, though it is not advisable.\n\n\
                  9) Courts can punish for contempt without a full trial. Contempt of court can be punished swiftly to protect judicial authority, sometimes without lengthy trial procedures.\n\n\
                  10) Judges can rely on common sense, not just law books. Courts are allowed to apply judicial notice, accepting certain facts as universally known without formal proof.",
        thumbnail: "https://raw.githubusercontent.com/ankushchowrasia/blogs-/e870d84bed6e7e16c9f7d933c186a68f6d2b30b1/Screenshot%202026-01-03%20124122.png",
        published_date: "January 3, 2026",
        published_date_iso: "2026-01-03",
        slug: "lesser-known-facts-about-indian-laws",
    },
    SeedPost {
        id: "seed-2",
        title: "Why Judicial Independence Is the Backbone of Democracy?",
        content: "In my opinion judicial independence is a fundamental pillar of democracy. It ensures that courts function without external pressure from authorities, governments, or public opinion. An independent judiciary allows judges to decide cases based solely on law, evidence, and constitutional principles, which is essential for maintaining public trust in the legal system.\n\n\
                  In a democratic country like India, power is divided among the legislature, executive, and judiciary. Judicial independence maintains this balance by acting as a check on the other two branches. When courts are free from influence of the external factors, they can review laws, executive actions, and administrative decisions without fear or bias, protecting constitutional authority.\n\n\
                  Without judicial independence, the rights of people become weak. Courts play a crucial role in safeguarding fundamental rights, protections of minority, and civil liberties. If judges are influenced by political ideology or authority, justice may favor power over fairness, weakening the protection that democracy promises to every citizen.\n\n\
                  Thus, we can say that democracy cannot survive without an independent judiciary. While reforms and technology can improve efficiency, the core value of judicial independence must remain protected. Courts must be guided by law, reason, not political pressure, to ensure justice, equality, stability.",
        thumbnail: "https://raw.githubusercontent.com/ankushchowrasia/blogs-/e870d84bed6e7e16c9f7d933c186a68f6d2b30b1/Screenshot%202026-01-02%20133747.png",
        published_date: "January 2, 2026",
        published_date_iso: "2026-01-02",
        slug: "why-judicial-independence-is-the-backbone-of-democracy",
    },
    SeedPost {
        id: "seed-3",
        title: "Can Technology Replace Human Judges?",
        content: "In my opinion, technology cannot replace human judges in courts; it can only assist judges in providing judgments because law is not just a subject of rules and data but also of justice, equality, and fairness. Decisions require human morality, honesty, and qualities beyond what AI can provide. Judgments cannot be decided solely on past data, as law deals with human lives and values.\n\n\
                  In the contemporary world, AI has already begun speeding up tasks such as legal research, managing case files, scheduling hearings and meetings, analyzing large documents, also works as a data analyst. Keeping in note that all of these are the supporting role which an AI provides to the judge, to make their work easier and improve consistency.\n\n\
                  The major problem with giving complete authority to an AI judge is that artificial intelligence is trained on past data, including previous judgments. If those judgments contain biases—such as social, class, or gender bias—it is quite possible that the AI will reproduce the same biased judgments, affecting a person's life.\n\n\
                  Let us take a hypothetical situation: if the AI judge gives a wrong judgement, then who will take the accountability for that? The programmer? The past decisions? Or the government? I think justice requires accountability, which AI cannot provide for now.\n\n\
                  Thus, we can say that AI cannot completely replace human judges, but they can just speed up their work and reduce workload.",
        thumbnail: "https://raw.githubusercontent.com/ankushchowrasia/blogs-/e870d84bed6e7e16c9f7d933c186a68f6d2b30b1/Screenshot%202026-01-01%20204357.png",
        published_date: "January 1, 2026",
        published_date_iso: "2026-01-01",
        slug: "can-technology-replace-human-judges",
    },
];

pub fn seed_blogs() -> Vec<BlogPost> {
    SEED_POSTS.iter().map(SeedPost::to_blog_post).collect()
}
