// All cross-cutting LLM prompt constants. Module-specific prompts that grow
// beyond one template should move next to their module.

/// Skill comparison prompt. Replace `{resume}` and `{job_description}` before
/// sending. The model must answer with the bare JSON object only.
pub const SKILL_MATCH_PROMPT_TEMPLATE: &str = r#"You are an expert ATS skill-matching engine. Your job is to extract skills from the Resume and compare them with the Job Description (JD) with high accuracy.

Follow these steps STRICTLY:

1. Extract Skills from RESUME:
   - Only list skills that are explicitly mentioned.
   - Do NOT assume or infer skills.
   - Look for: Technical Skills, Soft Skills, Tools & Technologies, Programming Languages, Frameworks, Libraries

2. Extract Required Skills from JD:
   - Identify all required skills stated in the JD.
   - Include: Required technical skills, Preferred skills, Tools, frameworks, libraries, Soft skills

3. Compare Resume vs JD SKILLS:
   - Mark as MATCHED: Skills that appear in BOTH resume AND job description (exact or close equivalent)
   - Mark as MISSING: Skills required in JD but NOT found in resume
   - Mark as EXTRA: Skills in resume but NOT required by JD (bonus skills the candidate has)
   - Be STRICT and ACCURATE in classification

4. Return ONLY valid JSON in this EXACT format (no markdown, no extra text):
{
  "matched": ["skill1", "skill2"],
  "missing": ["skill3", "skill4"],
  "extra": ["skill5", "skill6"]
}

RESUME:
{resume}

JOB DESCRIPTION:
{job_description}

Return ONLY the JSON object, nothing else."#;

/// Learning-roadmap prompt. Replace `{missing_skills}` (comma-separated list)
/// before sending. The output format below is what `roadmap::parser` expects.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Create a detailed 2-week learning roadmap for these missing skills: {missing_skills}

IMPORTANT: Organize by PRIORITY and DIFFICULTY LEVEL:
- Week 1: FUNDAMENTALS & BASICS - Start with foundational concepts and prerequisite knowledge
- Week 2: ADVANCED & PRACTICAL - Build on Week 1 with complex topics and hands-on projects

Structure the roadmap as follows:

## Week 1: Fundamentals & Basics
### Day [N]: [Topic]
- Time: [X hours]
- [What to learn in detail] | [Reference URL]

## Week 2: Advanced & Practical Application
### Day [N]: [Topic]
- Time: [X hours]
- [What to learn in detail] | [Reference URL]

CRITICAL REQUIREMENTS FOR REFERENCE LINKS - USE ONLY THESE SOURCES (in priority order):

1. W3Schools (https://www.w3schools.com/) - HTML, CSS, JavaScript, Python, SQL, React
2. Microsoft Learn (https://learn.microsoft.com/) - .NET, C#, Azure, TypeScript
3. GeeksforGeeks (https://www.geeksforgeeks.org/) - algorithms, data structures, programming concepts
4. MDN Web Docs (https://developer.mozilla.org/) - web technologies and Web APIs
5. Official documentation when freely accessible (react.dev, docs.python.org, nodejs.org/docs)
6. freeCodeCamp (https://www.freecodecamp.org/news/) - comprehensive tutorials
7. Tutorialspoint (https://www.tutorialspoint.com/) - programming tutorials
8. Programiz (https://www.programiz.com/) - programming basics

RULES:
- ONLY use main landing pages and section pages from these domains
- DO NOT use specific blog URLs or dated articles that might get removed
- Week 1 MUST contain only BASIC, FOUNDATIONAL topics
- Week 2 MUST contain ADVANCED, PRACTICAL topics that build on Week 1
- Each resource line MUST be formatted as: "[What to learn in detail] | [Full valid URL from above sources]"
- Each day should have 3-4 learning resources
- Include realistic time estimates for each day

Example:
## Week 1: Fundamentals & Basics
### Day 1: Introduction to React Basics
- Time: 3-4 hours
- Learn what React is, its component-based architecture, and how it uses Virtual DOM | https://www.w3schools.com/react/
- Understand JSX syntax and the rules of JSX expressions | https://react.dev/learn/writing-markup-with-jsx

Keep it practical, progressive, and actionable with WORKING links from APPROVED sources only."#;

/// Roadmap text returned without an LLM call when the candidate has no
/// missing skills.
pub const NO_GAPS_ROADMAP: &str =
    "Great! You already have all the required skills. Focus on building projects to demonstrate your expertise.";
