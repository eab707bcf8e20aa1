use crate::models::{RiskCategory, RiskLevel, SignalKind};

/// Recommendation and summary wording.
/// Calm, practical phrasing: no alarm words, no diagnosis.
pub struct RecommendationTemplates;

impl RecommendationTemplates {
    /// Message for a detected signal.
    pub fn signal(kind: SignalKind) -> &'static str {
        match kind {
            SignalKind::StressMarker => {
                "Your description mentions signs of strain such as headache or fatigue. \
                 Short rest breaks and a steady daily routine may help. \
                 If the symptoms persist, consider mentioning them to your doctor."
            }
            SignalKind::SleepDisturbance => {
                "Your description points to disturbed sleep. \
                 Keeping a regular bedtime and a dark, quiet bedroom may help."
            }
            SignalKind::RespiratoryStress => {
                "Your description mentions breathing discomfort. \
                 Consider limiting time outdoors on days with poor air quality \
                 and airing your home when pollution is lower."
            }
            SignalKind::HeavyMetalToxicity => {
                "A metallic taste can be linked to water or air exposure. \
                 You might want to check your drinking water and discuss the taste with your doctor."
            }
            SignalKind::CognitiveFragmentation => {
                "Your description was very short. \
                 Noting when symptoms start and how long they last can make patterns easier to see."
            }
        }
    }

    /// Message for a high category risk with no matching signal in the text.
    pub fn category(category: RiskCategory) -> &'static str {
        match category {
            RiskCategory::ChronicStress => {
                "The overall environmental load in your area is high. \
                 Time in quieter, greener places may help you recover."
            }
            RiskCategory::Respiratory => {
                "Air quality in your area is poor. \
                 Consider limiting outdoor activity and keeping windows closed at peak hours."
            }
            RiskCategory::SleepDisorder => {
                "Night-time noise and light in your area are high. \
                 Blackout curtains or earplugs may improve your sleep."
            }
        }
    }

    /// Correlation sentence for the highest category level.
    pub fn summary(level: RiskLevel) -> &'static str {
        match level {
            RiskLevel::High => {
                "Strong correlation between your symptoms and local environmental factors. \
                 Acting on the recommendations below is advised."
            }
            RiskLevel::Moderate => {
                "Moderate correlation observed. \
                 Your symptoms may be influenced by local environmental conditions."
            }
            RiskLevel::Low => {
                "Mild environmental influence. Continue monitoring for pattern changes."
            }
        }
    }

    pub fn insufficient_data() -> &'static str {
        "Not enough information for an assessment. \
         Add a symptom description or environmental data for your location."
    }
}

/// Localized wording. Dispatches on language code, English otherwise.
pub struct RecommendationTemplatesI18n;

impl RecommendationTemplatesI18n {
    pub fn signal(lang: &str, kind: SignalKind) -> &'static str {
        match lang {
            "ru" => match kind {
                SignalKind::StressMarker => {
                    "В вашем описании есть признаки напряжения, например головная боль или усталость. \
                     Короткие перерывы на отдых и размеренный распорядок дня могут помочь. \
                     Если симптомы сохраняются, расскажите о них врачу."
                }
                SignalKind::SleepDisturbance => {
                    "Ваше описание указывает на нарушенный сон. \
                     Постоянное время отхода ко сну и тёмная тихая спальня могут помочь."
                }
                SignalKind::RespiratoryStress => {
                    "Вы упоминаете затруднённое дыхание. \
                     В дни с плохим качеством воздуха старайтесь меньше бывать на улице \
                     и проветривайте дом, когда загрязнение ниже."
                }
                SignalKind::HeavyMetalToxicity => {
                    "Металлический привкус бывает связан с водой или воздухом. \
                     Стоит проверить питьевую воду и обсудить привкус с врачом."
                }
                SignalKind::CognitiveFragmentation => {
                    "Ваше описание было очень коротким. \
                     Отмечайте, когда появляются симптомы и сколько они длятся: так закономерности легче заметить."
                }
            },
            _ => RecommendationTemplates::signal(kind),
        }
    }

    pub fn category(lang: &str, category: RiskCategory) -> &'static str {
        match lang {
            "ru" => match category {
                RiskCategory::ChronicStress => {
                    "Общая экологическая нагрузка в вашем районе высокая. \
                     Время в тихих зелёных местах поможет восстановиться."
                }
                RiskCategory::Respiratory => {
                    "Качество воздуха в вашем районе низкое. \
                     Сократите время на улице и держите окна закрытыми в часы пик."
                }
                RiskCategory::SleepDisorder => {
                    "Ночью в вашем районе много шума и света. \
                     Плотные шторы или беруши могут улучшить сон."
                }
            },
            _ => RecommendationTemplates::category(category),
        }
    }

    pub fn summary(lang: &str, level: RiskLevel) -> &'static str {
        match lang {
            "ru" => match level {
                RiskLevel::High => {
                    "Сильная связь между вашими симптомами и факторами окружающей среды. \
                     Рекомендуем последовать советам ниже."
                }
                RiskLevel::Moderate => {
                    "Умеренная связь. \
                     На ваши симптомы могут влиять местные условия окружающей среды."
                }
                RiskLevel::Low => {
                    "Слабое влияние окружающей среды. Продолжайте наблюдение за изменениями."
                }
            },
            _ => RecommendationTemplates::summary(level),
        }
    }

    pub fn insufficient_data(lang: &str) -> &'static str {
        match lang {
            "ru" => {
                "Недостаточно данных для оценки. \
                 Добавьте описание симптомов или данные об окружающей среде."
            }
            _ => RecommendationTemplates::insufficient_data(),
        }
    }
}
