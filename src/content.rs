//! Static content document for the festival page.
//!
//! All text, asset paths and video ids live here as immutable data so the
//! page renderer stays a dumb consumer and the reveal mechanism can be
//! exercised with any content.

#[derive(Debug, Clone, PartialEq)]
pub struct FestivalContent {
    pub navbar_title: &'static str,
    /// Poster repeated as the fixed decorative background on both edges.
    pub background_image: &'static str,
    pub hero: HeroSection,
    pub symposium: SymposiumSection,
    pub competition: CompetitionSection,
    pub concerts: ConcertsSection,
    pub archive: ArchiveSection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroSection {
    pub image: &'static str,
    pub image_alt: &'static str,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymposiumSection {
    pub logo: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub paragraphs: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompetitionSection {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
    pub date_heading: &'static str,
    pub rules_heading: &'static str,
    pub rules_intro: &'static str,
    pub categories: &'static [CompetitionCategory],
    pub inscription: InscriptionRules,
    pub important_heading: &'static str,
    pub important_items: &'static [&'static str],
    pub schedule_heading: &'static str,
    pub schedule_intro: &'static str,
    pub schedule_items: &'static [&'static str],
    pub schedule_note: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompetitionCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub phases: &'static [CompetitionPhase],
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompetitionPhase {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InscriptionRules {
    pub heading: &'static str,
    pub details: &'static str,
    pub email: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConcertsSection {
    pub title: &'static str,
    pub opening_title: &'static str,
    pub opening: Performer,
    pub cafe_title: &'static str,
    pub cafe_subtitle: &'static str,
    pub cafe_performers: &'static [Performer],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Performer {
    pub image: &'static str,
    pub name: &'static str,
    pub lines: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveSection {
    pub title: &'static str,
    pub image: &'static str,
    pub lines: &'static [&'static str],
    pub videos: &'static [VideoEmbed],
}

/// Embedded YouTube player at a fixed aspect ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoEmbed {
    pub id: &'static str,
    pub title: &'static str,
    /// padding-top percentage that pins the frame's aspect ratio.
    pub aspect_padding: &'static str,
    pub max_width: Option<&'static str>,
}

impl VideoEmbed {
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.id)
    }
}

pub fn festival_2025() -> FestivalContent {
    FestivalContent {
        navbar_title: "Festival Mundial de la Guitarra",
        background_image: "/assets/image001.jpg",
        hero: HeroSection {
            image: "/assets/image001.jpg",
            image_alt: "Festival Mundial de la Guitarra 2025",
            title: "2do Festival Mundial de la Guitarra",
            lines: &[
                "MAYAGÜEZ 2025",
                "1-4 DE MAYO DE 2025",
                "WWW.FESTIVALMUNDIALDELAGUITARRA.COM",
            ],
        },
        symposium: SymposiumSection {
            logo: "/assets/fest-logo.png",
            title: "Simposio Internacional sobre la construcción de la Guitarra",
            image: "/assets/image002.png",
            paragraphs: &[
                "El Festival Mundial de la Guitarra, Mayagüez 2025 promete ser un evento sin precedentes en \
                 Puerto Rico, consolidando a la ciudad de Mayagüez en un punto clave para el arte y la cultura a nivel \
                 internacional. Este festival único en su clase se distingue por ofrecer una experiencia integral que combina \
                 música, pedagogía y el conocimiento artesanal detrás de la guitarra clásica.",
                "El evento contará con una serie de conciertos protagonizados por virtuosos de renombre \
                 mundial, un Simposio Internacional sobre la construcción de la guitarra clásica, y clases \
                 magistrales dirigidas a los estudiantes de la Escuela Libre de Música de Mayagüez.",
                "En la parte musical, los conciertos incluirán la participación de intérpretes de talla mundial como \
                 Leonela Alejandro, ganadora del prestigioso GFA 2024, el brasileño Marcus Toscano, y el \
                 reconocido virtuoso puertorriqueño Iván Rijos, cuya maestría es ampliamente aclamadas en los \
                 escenarios internacionales.",
                "El Festival Mundial de la Guitarra, Mayagüez 2025 se proyecta como un evento que trascenderá \
                 fronteras, posicionando a Puerto Rico como un referente cultural y artístico en el mundo de la guitarra \
                 clásica.",
            ],
        },
        competition: CompetitionSection {
            title: "Concurso Nacional de Guitarra, Gustavo y Beatriz Arvelo",
            subtitle: "(Para jóvenes guitarristas puertorriqueños de 12 a 18 años)",
            image: "/assets/image003.png",
            date_heading: "Sábado, 3 de mayo de 2025",
            rules_heading: "Bases del Concurso",
            rules_intro: "El Concurso Nacional de Guitarra Gustavo y Beatriz Arvelo estará subdividido en dos categorías: \
                          Categoría de 12 a 15 años y Categoría de 16 a 18 años.",
            categories: &[
                CompetitionCategory {
                    name: "Categoría de 12 a 15 años",
                    description: "La Categoría de 12 a 15 años consistirá de una fase en la cual cada participante deberá \
                                  interpretar una pieza de libre selección con una duración máxima de 3 minutos. (Todas las \
                                  obras deben ser interpretadas de memoria).",
                    phases: &[],
                },
                CompetitionCategory {
                    name: "Categoría de 16 a 18 años",
                    description: "La Categoría de 16 a 18 años consistirá de una Fase eliminatoria y un Concierto de Finalistas.",
                    phases: &[
                        CompetitionPhase {
                            name: "Fase eliminatoria:",
                            description: "Cada participante deberá interpretar un repertorio de libre elección con una duración \
                                          máxima de 5 minutos. (Todas las obras deben ser interpretadas de memoria). Posterior a \
                                          la Primera Fase, el jurado anunciará los cuatro concursantes que se presentarán en el \
                                          Concierto de Finalistas.",
                        },
                        CompetitionPhase {
                            name: "Concierto de Finalistas:",
                            description: "Cada uno de los cuatro concursantes seleccionados deberá interpretar un repertorio de \
                                          libre elección de 15 minutos de duración. (Se permite utilizar el mismo repertorio \
                                          presentado en la primera fase del concurso y todas las obras deben ser interpretadas \
                                          de memoria).",
                        },
                    ],
                },
            ],
            inscription: InscriptionRules {
                heading: "Proceso de inscripción",
                details: "La inscripción se realizará entre el 1 de abril hasta el 8 de abril 2025. Los concursantes de ambas \
                          categorías deberán enviar un correo electrónico indicando su interés en participar, e incluir su \
                          nombre completo, fecha de nacimiento, edad al momento del concurso, título y compositor del \
                          repertorio a interpretar. También deberán adjuntar una fotografía con buena resolución la cual se \
                          expondrá en tarima durante su participación.",
                email: "fmg@gmail.com",
                note: "Atención: Debido a que se estaremos elaborando un programa impreso para el día del evento, no se \
                       permitirá la inscripción al certamen posterior a las fechas estipuladas.",
            },
            important_heading: "Importante",
            important_items: &[
                "Al momento de la inscripción, todos los participantes de la Categoría de 16 a 18 años deberán someter, \
                 tanto el repertorio de la Primera Fase, como el repertorio de 15 minutos que estarían interpretando en \
                 caso de ser seleccionados para el Concierto de Finalistas. (No podrán participar si no cumplen con este \
                 requisito).",
                "Concursantes que hayan obtenido el Primer lugar, en ediciones anteriores, no podrán participar.",
            ],
            schedule_heading: "Fecha y Horario",
            schedule_intro: "El Concurso Nacional de la Guitarra Gustavo y Beatriz Arvelo, Mayagüez 2025, se llevará a cabo \
                             el sábado 3 de mayo de 2025 en el Teatro Yagüez de Mayagüez.",
            schedule_items: &[
                "La categoría de 12 a 15 años será a las 3:00 p.m.",
                "Primera Fase de la categoría de 16 a 18 años a las 4:00 p.m.",
                "El Concierto de Finalistas se llevará a cabo a las 6:00 p.m.",
            ],
            schedule_note: "Todos los eventos se llevarán a cabo en estricta puntualidad. Los concursantes participarán en \
                            orden alfabético y/o por orden de nivel de dificultad de su repertorio.",
        },
        concerts: ConcertsSection {
            title: "Conciertos",
            opening_title: "Concierto de apertura",
            // image004-006 were exported under other performers' names; the
            // paths follow the actual files, the names follow the printed
            // program.
            opening: Performer {
                image: "/assets/image004.jpg",
                name: "Leonela Alejandro (Puerto Rico)",
                lines: &[
                    "\"1er Premio, GFA 2024\"",
                    "Jueves, 1 de mayo 2025",
                    "8:00pm, Teatro Yagüez",
                ],
            },
            cafe_title: "Café Conciertos",
            cafe_subtitle: "(Degustación de Guitarras)",
            cafe_performers: &[
                Performer {
                    image: "/assets/image005.jpg",
                    name: "Iván Rijos",
                    lines: &["Puerto Rico"],
                },
                Performer {
                    image: "/assets/image006.jpg",
                    name: "Marcus Toscano",
                    lines: &["Brazil"],
                },
            ],
        },
        archive: ArchiveSection {
            title: "Festival Mundial de la Guitarra 2024",
            image: "/assets/image007.jpg",
            lines: &[
                "Primer Festival Mundial de la Guitarra",
                "Mayagüez, Puerto Rico",
                "4-7 de mayo de 2024",
            ],
            videos: &[
                VideoEmbed {
                    id: "4ys2KLiY574",
                    title: "Concierto de Finalistas, Concurso Nacional Gustavo y Beatriz Arvelo",
                    aspect_padding: "56.32%",
                    max_width: None,
                },
                VideoEmbed {
                    id: "mODYpFhwHEA",
                    title: "Simposio- \"Festival Mundial de la Guitarra\"",
                    aspect_padding: "56.25%",
                    max_width: Some("400px"),
                },
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_is_fully_populated() {
        let content = festival_2025();
        assert_eq!(content.navbar_title, "Festival Mundial de la Guitarra");
        assert_eq!(content.hero.lines.len(), 3);
        assert_eq!(content.symposium.paragraphs.len(), 4);
        assert_eq!(content.competition.categories.len(), 2);
        assert_eq!(content.concerts.cafe_performers.len(), 2);
        assert_eq!(content.archive.videos.len(), 2);
    }

    #[test]
    fn older_category_has_two_phases() {
        let content = festival_2025();
        assert!(content.competition.categories[0].phases.is_empty());
        assert_eq!(content.competition.categories[1].phases.len(), 2);
    }

    #[test]
    fn video_embeds_point_at_youtube() {
        let content = festival_2025();
        let urls: Vec<String> = content.archive.videos.iter().map(VideoEmbed::embed_url).collect();
        assert_eq!(urls[0], "https://www.youtube.com/embed/4ys2KLiY574");
        assert_eq!(urls[1], "https://www.youtube.com/embed/mODYpFhwHEA");
        assert_eq!(content.archive.videos[1].max_width, Some("400px"));
    }
}
