pub fn render_index(date: &str, streak: u32) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{STREAK}}", &streak.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Consistency Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #020617;
      --bg-2: #0f172a;
      --ink: #dbeafe;
      --accent: #34d399;
      --accent-2: #fb923c;
      --danger: #dc2626;
      --card: rgba(15, 23, 42, 0.82);
      --shadow: 0 24px 60px rgba(2, 6, 23, 0.55);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #0b1120 60%, var(--bg-1) 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      border: 1px solid rgba(96, 165, 250, 0.18);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
      text-align: center;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
      background: linear-gradient(90deg, #93c5fd, #22d3ee, #93c5fd);
      -webkit-background-clip: text;
      background-clip: text;
      color: transparent;
    }

    .subtitle {
      margin: 0;
      color: #93b4e0;
      font-size: 1rem;
    }

    .month-title {
      margin: 0 0 12px;
      text-align: center;
      font-size: 1.2rem;
      color: #bfdbfe;
    }

    .calendar-scroll {
      overflow-x: auto;
      padding-bottom: 6px;
    }

    .calendar {
      display: flex;
      gap: 10px;
      min-width: max-content;
      padding: 2px;
    }

    .day {
      width: 46px;
      height: 46px;
      display: flex;
      align-items: center;
      justify-content: center;
      border-radius: 12px;
      font-weight: 600;
      flex-shrink: 0;
      transition: transform 150ms ease;
    }

    .day:hover {
      transform: scale(1.08);
    }

    .day.future {
      background: rgba(30, 41, 59, 0.6);
      border: 2px solid rgba(71, 85, 105, 0.4);
      color: rgba(148, 163, 184, 0.6);
    }

    .day.complete {
      background: linear-gradient(135deg, #059669, #16a34a);
      border: 2px solid rgba(52, 211, 153, 0.5);
      color: white;
    }

    .day.incomplete {
      background: linear-gradient(135deg, var(--danger), #b91c1c);
      border: 2px solid rgba(248, 113, 113, 0.5);
      color: white;
    }

    .streak-row {
      display: flex;
      justify-content: center;
    }

    .streak-badge {
      display: inline-flex;
      align-items: center;
      gap: 10px;
      padding: 12px 26px;
      border-radius: 999px;
      background: linear-gradient(90deg, rgba(124, 45, 18, 0.5), rgba(154, 52, 18, 0.5));
      border: 1px solid rgba(251, 146, 60, 0.35);
      box-shadow: 0 10px 24px rgba(2, 6, 23, 0.4);
    }

    .streak-badge .flame {
      font-size: 1.4rem;
    }

    .streak-badge .count {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .streak-badge .label {
      color: #fdba74;
    }

    .congrats {
      display: none;
      text-align: center;
      padding: 22px;
      border-radius: 18px;
      background: rgba(16, 185, 129, 0.14);
      border: 2px solid var(--accent);
      animation: pulse 1.2s ease infinite alternate;
    }

    .congrats.visible {
      display: block;
    }

    .congrats h2 {
      margin: 0;
      color: #6ee7b7;
    }

    .congrats p {
      margin: 8px 0 0;
      color: #a7f3d0;
    }

    .topics {
      display: grid;
      gap: 14px;
    }

    .topic {
      appearance: none;
      width: 100%;
      display: flex;
      align-items: center;
      justify-content: space-between;
      padding: 20px 24px;
      border-radius: 16px;
      font-size: 1.05rem;
      font-weight: 500;
      font-family: inherit;
      color: var(--ink);
      cursor: pointer;
      background: rgba(30, 41, 59, 0.45);
      border: 2px solid rgba(51, 65, 85, 0.4);
      transition: background 200ms ease, border-color 200ms ease, transform 150ms ease;
    }

    .topic:active {
      transform: scale(0.99);
    }

    .topic:hover {
      border-color: rgba(96, 165, 250, 0.4);
    }

    .topic.done {
      background: linear-gradient(90deg, #059669, #16a34a);
      border-color: var(--accent);
      color: white;
    }

    .topic .check {
      visibility: hidden;
      font-size: 1.2rem;
    }

    .topic.done .check {
      visibility: visible;
    }

    .topic-flash {
      display: none;
      margin: 6px 0 0 14px;
      color: #6ee7b7;
      font-size: 0.95rem;
    }

    .topic-flash.visible {
      display: block;
    }

    .status {
      font-size: 0.95rem;
      color: #93b4e0;
      min-height: 1.2em;
      text-align: center;
    }

    .status[data-type="error"] {
      color: #f87171;
    }

    .status[data-type="ok"] {
      color: #6ee7b7;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @keyframes pulse {
      from {
        opacity: 0.85;
      }
      to {
        opacity: 1;
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Daily Consistency Tracker</h1>
      <p id="date" class="subtitle">{{DATE}}</p>
    </header>

    <section>
      <h3 class="month-title" id="month-title"></h3>
      <div class="calendar-scroll">
        <div class="calendar" id="calendar"></div>
      </div>
    </section>

    <section class="streak-row">
      <div class="streak-badge">
        <span class="flame">&#128293;</span>
        <span class="count" id="streak">{{STREAK}}</span>
        <span class="label">day streak</span>
      </div>
    </section>

    <div class="congrats" id="congrats">
      <h2>Congratulations!</h2>
      <p>You've made your time useful today!</p>
    </div>

    <section class="topics" id="topics"></section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const TOPICS = [
      { key: 'ai_knowledge', label: 'AI Knowledge' },
      { key: 'codebasics', label: 'Codebasics' },
      { key: 'trading', label: 'Trading' }
    ];

    const dateEl = document.getElementById('date');
    const streakEl = document.getElementById('streak');
    const statusEl = document.getElementById('status');
    const calendarEl = document.getElementById('calendar');
    const monthTitleEl = document.getElementById('month-title');
    const congratsEl = document.getElementById('congrats');
    const topicsEl = document.getElementById('topics');

    let todayData = null;
    let congratsTimer = null;
    const flashTimers = {};

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const showCongrats = () => {
      congratsEl.classList.add('visible');
      clearTimeout(congratsTimer);
      congratsTimer = setTimeout(() => congratsEl.classList.remove('visible'), 5000);
    };

    const flashTopic = (key) => {
      const flash = document.getElementById(`flash-${key}`);
      flash.classList.add('visible');
      clearTimeout(flashTimers[key]);
      flashTimers[key] = setTimeout(() => flash.classList.remove('visible'), 3000);
    };

    const renderTopics = () => {
      topicsEl.innerHTML = '';
      TOPICS.forEach(({ key, label }) => {
        const wrapper = document.createElement('div');
        const button = document.createElement('button');
        const done = todayData ? todayData[key] : false;
        button.className = done ? 'topic done' : 'topic';
        button.type = 'button';
        button.innerHTML = `<span>${label}</span><span class="check">&#10003;</span>`;
        button.addEventListener('click', () => {
          sendToggle(key, !done).catch((err) => setStatus(err.message, 'error'));
        });

        const flash = document.createElement('div');
        flash.className = 'topic-flash';
        flash.id = `flash-${key}`;
        flash.textContent = `Congrats on completing ${label} today!`;

        wrapper.appendChild(button);
        wrapper.appendChild(flash);
        topicsEl.appendChild(wrapper);
      });
    };

    const renderCalendar = (calendar) => {
      const monthName = new Date(calendar.year, calendar.month - 1, 1)
        .toLocaleDateString('en-US', { month: 'long', year: 'numeric' });
      monthTitleEl.textContent = monthName;
      calendarEl.innerHTML = '';
      calendar.days.forEach((cell) => {
        const el = document.createElement('div');
        el.className = `day ${cell.status}`;
        el.textContent = cell.day;
        el.title = cell.date;
        calendarEl.appendChild(el);
      });
    };

    const applyToday = (data) => {
      todayData = data;
      dateEl.textContent = data.date;
      streakEl.textContent = data.streak;
      renderTopics();
    };

    const loadToday = async () => {
      const res = await fetch('/api/today');
      if (!res.ok) {
        throw new Error('Unable to load today data');
      }
      applyToday(await res.json());
    };

    const loadCalendar = async () => {
      const res = await fetch('/api/calendar');
      if (!res.ok) {
        throw new Error('Unable to load calendar');
      }
      renderCalendar(await res.json());
    };

    const refresh = async () => {
      await Promise.all([loadToday(), loadCalendar()]);
    };

    const sendToggle = async (topic, done) => {
      setStatus('Saving...', 'info');
      const res = await fetch('/api/toggle', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ topic, done })
      });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }

      const updated = await res.json();
      applyToday(updated);
      if (done) {
        flashTopic(topic);
      }
      if (updated.celebrate) {
        showCongrats();
      }
      loadCalendar().catch((err) => setStatus(err.message, 'error'));
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    // Day rollover is the page's concern: re-fetch once a minute so a
    // new day resets the checklist and recolors the calendar.
    setInterval(() => {
      refresh().catch((err) => setStatus(err.message, 'error'));
    }, 60000);

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
