//! The built-in country catalogue.
//!
//! Metric values are a curated snapshot; the refresh path rewrites the
//! database from this table until a live upstream feed replaces it.

use farshore_core::{Country, CountryMetrics, VisaDifficulty};

fn strings(values: [&str; 6]) -> Vec<String> {
    values.into_iter().map(str::to_owned).collect()
}

/// Return the full built-in catalogue of candidate countries.
pub fn builtin_countries() -> Vec<Country> {
    vec![
        Country::new(
            "NL",
            "Netherlands",
            "🇳🇱",
            CountryMetrics {
                gdp_per_capita: 52_331.0,
                safety_index: 8.7,
                healthcare_quality: 8.9,
                education_quality: 9.0,
                cost_of_living: 88.0,
                climate_score: 6.8,
                language_barrier: 4.0,
                tax_rate: 29.0,
                visa_difficulty: VisaDifficulty::Medium,
                infrastructure: 8.9,
                job_market: 8.3,
            },
            strings([
                "Excellent work-life balance and progressive work culture",
                "High-quality healthcare system with universal coverage",
                "Strong English proficiency among population",
                "Excellent cycling infrastructure and sustainable transport",
                "High quality of education and research institutions",
                "Stable political environment and strong rule of law",
            ]),
            strings([
                "High cost of living, especially housing in major cities",
                "Complex tax system with relatively high tax rates",
                "Challenging housing market with limited availability",
                "Weather can be unpredictable with frequent rain",
                "Bureaucratic processes can be slow and complex",
                "Social integration may take time for non-EU citizens",
            ]),
        ),
        Country::new(
            "FI",
            "Finland",
            "🇫🇮",
            CountryMetrics {
                gdp_per_capita: 48_810.0,
                safety_index: 9.2,
                healthcare_quality: 9.0,
                education_quality: 9.4,
                cost_of_living: 90.0,
                climate_score: 5.8,
                language_barrier: 8.0,
                tax_rate: 30.0,
                visa_difficulty: VisaDifficulty::Medium,
                infrastructure: 8.6,
                job_market: 7.9,
            },
            strings([
                "World-class education system and high literacy rates",
                "Excellent work-life balance with strong labor protections",
                "Very low crime rates and high personal safety",
                "Beautiful natural landscapes and clean environment",
                "Strong social safety net and universal healthcare",
                "High levels of government transparency and low corruption",
            ]),
            strings([
                "Very challenging climate with long, dark winters",
                "Finnish language is extremely difficult to learn",
                "Limited job market in certain sectors",
                "High cost of living, especially alcohol and dining out",
                "Social culture can be reserved, making integration challenging",
                "Limited sunlight during winter months affecting mental health",
            ]),
        ),
        Country::new(
            "PT",
            "Portugal",
            "🇵🇹",
            CountryMetrics {
                gdp_per_capita: 23_252.0,
                safety_index: 8.5,
                healthcare_quality: 7.8,
                education_quality: 7.8,
                cost_of_living: 65.0,
                climate_score: 9.0,
                language_barrier: 7.5,
                tax_rate: 21.5,
                visa_difficulty: VisaDifficulty::Medium,
                infrastructure: 7.5,
                job_market: 6.5,
            },
            strings([
                "Excellent climate with 300+ days of sunshine annually",
                "Relatively low cost of living compared to Western Europe",
                "Beautiful coastline and natural landscapes",
                "Growing tech sector and startup ecosystem",
                "Friendly and welcoming local population",
                "Strategic location with easy access to Europe and Africa",
            ]),
            strings([
                "Lower average salaries compared to Northern Europe",
                "Limited job opportunities in specialized fields",
                "Bureaucratic processes can be slow and inefficient",
                "Portuguese language barrier for career advancement",
                "Economic instability and high youth unemployment",
                "Infrastructure gaps in rural areas and smaller cities",
            ]),
        ),
        Country::new(
            "CA",
            "Canada",
            "🇨🇦",
            CountryMetrics {
                gdp_per_capita: 43_241.0,
                safety_index: 8.9,
                healthcare_quality: 8.5,
                education_quality: 8.7,
                cost_of_living: 75.0,
                climate_score: 6.2,
                language_barrier: 2.0,
                tax_rate: 26.0,
                visa_difficulty: VisaDifficulty::Medium,
                infrastructure: 8.2,
                job_market: 8.1,
            },
            strings([
                "Excellent immigration programs with clear pathways to citizenship",
                "Universal healthcare system",
                "Cultural diversity and multicultural society",
                "High quality of life and excellent education system",
                "Abundant natural resources and beautiful landscapes",
                "Strong economy with opportunities in multiple sectors",
            ]),
            strings([
                "Extremely cold winters in most regions",
                "High cost of living in major cities like Toronto and Vancouver",
                "Long wait times for certain medical procedures",
                "Competitive job market requiring Canadian experience",
                "Geographic isolation from family/friends in other continents",
                "High taxes, especially in certain provinces",
            ]),
        ),
        Country::new(
            "AU",
            "Australia",
            "🇦🇺",
            CountryMetrics {
                gdp_per_capita: 55_060.0,
                safety_index: 8.4,
                healthcare_quality: 8.3,
                education_quality: 8.8,
                cost_of_living: 95.0,
                climate_score: 8.5,
                language_barrier: 1.0,
                tax_rate: 32.0,
                visa_difficulty: VisaDifficulty::High,
                infrastructure: 8.1,
                job_market: 7.8,
            },
            strings([
                "Excellent climate and outdoor lifestyle opportunities",
                "High wages and strong job market in key sectors",
                "World-class universities and education system",
                "Universal healthcare system (Medicare)",
                "Cultural diversity and English-speaking environment",
                "Beautiful natural landscapes and beaches",
            ]),
            strings([
                "Extremely high cost of living in major cities",
                "Geographic isolation from rest of the world",
                "Strict and expensive visa requirements",
                "Natural disasters (bushfires, floods, cyclones)",
                "Expensive domestic travel due to large distances",
                "Competitive job market with preference for local experience",
            ]),
        ),
        Country::new(
            "DE",
            "Germany",
            "🇩🇪",
            CountryMetrics {
                gdp_per_capita: 46_258.0,
                safety_index: 8.6,
                healthcare_quality: 8.7,
                education_quality: 8.5,
                cost_of_living: 82.0,
                climate_score: 6.5,
                language_barrier: 7.0,
                tax_rate: 35.0,
                visa_difficulty: VisaDifficulty::Medium,
                infrastructure: 8.8,
                job_market: 8.4,
            },
            strings([
                "Strong economy with excellent job opportunities in engineering and tech",
                "Excellent public transportation and infrastructure",
                "High-quality healthcare system",
                "Central location in Europe for travel and business",
                "Strong worker protections and benefits",
                "Rich cultural heritage and history",
            ]),
            strings([
                "German language is essential for career advancement",
                "Bureaucratic processes can be complex and slow",
                "Relatively high tax rates",
                "Weather can be gray and cold for extended periods",
                "Formal business culture that may seem rigid",
                "Paperwork-heavy administrative processes",
            ]),
        ),
        Country::new(
            "CH",
            "Switzerland",
            "🇨🇭",
            CountryMetrics {
                gdp_per_capita: 81_867.0,
                safety_index: 9.5,
                healthcare_quality: 9.2,
                education_quality: 8.9,
                cost_of_living: 125.0,
                climate_score: 7.2,
                language_barrier: 6.5,
                tax_rate: 22.0,
                visa_difficulty: VisaDifficulty::High,
                infrastructure: 9.4,
                job_market: 8.7,
            },
            strings([
                "Highest wages globally with excellent job opportunities",
                "World-class infrastructure and public transportation",
                "Extremely safe with very low crime rates",
                "Beautiful alpine landscapes and outdoor recreation",
                "Political stability and excellent governance",
                "Central European location for business and travel",
            ]),
            strings([
                "Extremely high cost of living (highest globally)",
                "Very difficult visa and residency requirements for non-EU citizens",
                "Multiple language requirements (German, French, Italian)",
                "Conservative social culture with strict social norms",
                "Limited social integration opportunities for foreigners",
                "Expensive healthcare despite high quality",
            ]),
        ),
        Country::new(
            "SG",
            "Singapore",
            "🇸🇬",
            CountryMetrics {
                gdp_per_capita: 59_797.0,
                safety_index: 9.8,
                healthcare_quality: 9.1,
                education_quality: 8.6,
                cost_of_living: 105.0,
                climate_score: 7.8,
                language_barrier: 2.5,
                tax_rate: 17.0,
                visa_difficulty: VisaDifficulty::Medium,
                infrastructure: 9.6,
                job_market: 8.0,
            },
            strings([
                "Extremely safe with world-class law and order",
                "Strategic location as gateway to Asia",
                "Excellent infrastructure and smart city initiatives",
                "Low tax rates and business-friendly environment",
                "Cultural diversity with English as working language",
                "Excellent healthcare and education systems",
            ]),
            strings([
                "Very high cost of living, especially housing and cars",
                "Hot and humid tropical climate year-round",
                "Strict laws and regulations with heavy penalties",
                "High stress and competitive work environment",
                "Limited space and dense urban living",
                "Expensive to maintain Western lifestyle",
            ]),
        ),
        Country::new(
            "NZ",
            "New Zealand",
            "🇳🇿",
            CountryMetrics {
                gdp_per_capita: 42_084.0,
                safety_index: 8.8,
                healthcare_quality: 8.2,
                education_quality: 8.4,
                cost_of_living: 85.0,
                climate_score: 8.2,
                language_barrier: 1.0,
                tax_rate: 28.0,
                visa_difficulty: VisaDifficulty::Medium,
                infrastructure: 7.8,
                job_market: 7.5,
            },
            strings([
                "Stunning natural beauty and outdoor lifestyle",
                "Clean environment and low pollution",
                "Friendly and welcoming culture",
                "Good work-life balance",
                "English-speaking country",
                "Stable political system",
            ]),
            strings([
                "Geographic isolation from rest of the world",
                "Limited job market in specialized fields",
                "High cost of living relative to wages",
                "Expensive to travel internationally",
                "Limited cultural diversity in smaller cities",
                "Earthquake risk in some regions",
            ]),
        ),
        Country::new(
            "JP",
            "Japan",
            "🇯🇵",
            CountryMetrics {
                gdp_per_capita: 39_285.0,
                safety_index: 9.4,
                healthcare_quality: 8.8,
                education_quality: 8.3,
                cost_of_living: 92.0,
                climate_score: 7.0,
                language_barrier: 9.0,
                tax_rate: 30.0,
                visa_difficulty: VisaDifficulty::High,
                infrastructure: 9.2,
                job_market: 6.8,
            },
            strings([
                "Extremely safe society with low crime rates",
                "Excellent public transportation system",
                "Rich culture and history",
                "High-quality healthcare system",
                "Advanced technology and innovation",
                "Clean and organized cities",
            ]),
            strings([
                "Very difficult language barrier",
                "Rigid work culture with long hours",
                "Expensive cost of living in major cities",
                "Difficult visa requirements for permanent residency",
                "Natural disaster risks (earthquakes, tsunamis)",
                "Aging population and shrinking workforce",
            ]),
        ),
        Country::new(
            "KR",
            "South Korea",
            "🇰🇷",
            CountryMetrics {
                gdp_per_capita: 31_846.0,
                safety_index: 8.2,
                healthcare_quality: 8.5,
                education_quality: 8.7,
                cost_of_living: 78.0,
                climate_score: 6.8,
                language_barrier: 8.5,
                tax_rate: 24.0,
                visa_difficulty: VisaDifficulty::Medium,
                infrastructure: 8.9,
                job_market: 7.2,
            },
            strings([
                "Advanced technology and digital infrastructure",
                "Excellent healthcare system",
                "Strong education system",
                "Growing international business opportunities",
                "Rich cultural heritage",
                "Efficient public transportation",
            ]),
            strings([
                "Intense work culture and long hours",
                "Language barrier for non-Korean speakers",
                "High competition in job market",
                "Air pollution in major cities",
                "Social pressure and conformity expectations",
                "Limited international community outside Seoul",
            ]),
        ),
        Country::new(
            "IN",
            "India",
            "🇮🇳",
            CountryMetrics {
                gdp_per_capita: 2_256.0,
                safety_index: 6.2,
                healthcare_quality: 6.8,
                education_quality: 6.5,
                cost_of_living: 25.0,
                climate_score: 6.5,
                language_barrier: 3.0,
                tax_rate: 30.0,
                visa_difficulty: VisaDifficulty::Low,
                infrastructure: 5.8,
                job_market: 6.0,
            },
            strings([
                "Very low cost of living",
                "Growing tech and startup ecosystem",
                "English widely spoken in business",
                "Rich cultural diversity and heritage",
                "Large domestic market opportunities",
                "Relatively easy visa processes",
            ]),
            strings([
                "Significant infrastructure challenges",
                "Air pollution in major cities",
                "Income inequality and poverty",
                "Bureaucratic processes can be slow",
                "Healthcare quality varies significantly",
                "Traffic congestion and transportation issues",
            ]),
        ),
        Country::new(
            "US",
            "United States",
            "🇺🇸",
            CountryMetrics {
                gdp_per_capita: 63_544.0,
                safety_index: 7.8,
                healthcare_quality: 8.1,
                education_quality: 8.2,
                cost_of_living: 100.0,
                climate_score: 7.5,
                language_barrier: 1.0,
                tax_rate: 24.0,
                visa_difficulty: VisaDifficulty::High,
                infrastructure: 7.9,
                job_market: 8.5,
            },
            strings([
                "World's largest economy with diverse job opportunities",
                "Leading universities and research institutions",
                "Cultural diversity and entrepreneurial spirit",
                "High salaries in tech and professional sectors",
                "Innovation hub with venture capital access",
                "English-speaking environment",
            ]),
            strings([
                "Very expensive healthcare system",
                "Complex and lengthy visa processes",
                "High cost of living in major cities",
                "Limited social safety net compared to Europe",
                "Gun violence and safety concerns in some areas",
                "Work-life balance challenges in competitive sectors",
            ]),
        ),
        Country::new(
            "GB",
            "United Kingdom",
            "🇬🇧",
            CountryMetrics {
                gdp_per_capita: 42_330.0,
                safety_index: 8.2,
                healthcare_quality: 8.4,
                education_quality: 8.6,
                cost_of_living: 95.0,
                climate_score: 6.0,
                language_barrier: 1.0,
                tax_rate: 32.0,
                visa_difficulty: VisaDifficulty::High,
                infrastructure: 8.3,
                job_market: 7.8,
            },
            strings([
                "English-speaking country with rich cultural heritage",
                "Strong financial and tech sectors",
                "Universal healthcare system (NHS)",
                "Excellent universities and education system",
                "Gateway to Europe for business",
                "Diverse and multicultural society",
            ]),
            strings([
                "High cost of living, especially in London",
                "Unpredictable weather and limited sunshine",
                "Post-Brexit visa complications for EU citizens",
                "High taxes and expensive public transport",
                "Housing shortage and expensive property market",
                "NHS waiting times for non-emergency procedures",
            ]),
        ),
        Country::new(
            "FR",
            "France",
            "🇫🇷",
            CountryMetrics {
                gdp_per_capita: 40_493.0,
                safety_index: 8.0,
                healthcare_quality: 9.0,
                education_quality: 8.3,
                cost_of_living: 85.0,
                climate_score: 7.8,
                language_barrier: 8.0,
                tax_rate: 45.0,
                visa_difficulty: VisaDifficulty::Medium,
                infrastructure: 8.7,
                job_market: 7.2,
            },
            strings([
                "Excellent healthcare system ranked #1 globally",
                "Strong work-life balance with 35-hour work week",
                "Rich culture, cuisine, and historical heritage",
                "Excellent public transportation and infrastructure",
                "Beautiful landscapes and climate diversity",
                "Strong social benefits and worker protections",
            ]),
            strings([
                "French language essential for career advancement",
                "Very high tax rates, especially for high earners",
                "Bureaucratic processes can be complex",
                "High unemployment rates in certain sectors",
                "Strikes and labor disputes can disrupt services",
                "Formal business culture and social hierarchies",
            ]),
        ),
    ]
}
